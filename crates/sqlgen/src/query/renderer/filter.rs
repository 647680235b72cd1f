use crate::query::{
    ast::filter::Filter,
    renderer::{Render, Renderer},
};

impl Render for Filter {
    fn render(&self, r: &mut Renderer) {
        if self.predicates.is_empty() {
            r.sql.push_str(&self.base);
            return;
        }

        let separator = format!(" {} ", self.joiner.keyword());
        r.sql.push_str(self.base.trim_end());
        r.sql.push_str(" where ");
        r.render_assignments(&self.predicates, " = ", &separator);
    }
}
