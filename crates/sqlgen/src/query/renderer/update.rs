use crate::query::{
    ast::update::Update,
    renderer::{Render, Renderer},
};

impl Render for Update {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("update ");
        r.sql.push_str(&self.table);
        r.sql.push_str(" set ");
        r.render_assignments(&self.assignments, "=", ", ");

        if !self.keys.is_empty() {
            r.sql.push_str(" where ");
            r.render_assignments(&self.keys, "=", " and ");
        }
    }
}
