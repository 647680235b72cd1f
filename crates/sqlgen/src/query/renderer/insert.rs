use crate::query::{
    ast::insert::{Insert, OnConflict},
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. insert into table (...)
        r.sql.push_str("insert into ");
        r.sql.push_str(&self.table);
        r.sql.push_str(" (");
        let columns: Vec<&str> = self.values.iter().map(|a| a.column.as_str()).collect();
        r.sql.push_str(&columns.join(", "));
        r.sql.push(')');

        // 2. values(...)
        r.sql.push_str(" values(");
        for (i, assignment) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.add_param(&assignment.param);
        }
        r.sql.push(')');

        if let Some(on_conflict) = &self.on_conflict {
            render_on_conflict(on_conflict, r);
        }
    }
}

fn render_on_conflict(on_conflict: &OnConflict, r: &mut Renderer) {
    if on_conflict.column.is_empty() || on_conflict.assignments.is_empty() {
        return;
    }

    r.sql.push_str(" on conflict(");
    r.sql.push_str(&on_conflict.column);
    r.sql.push_str(") do update set ");
    r.render_assignments(&on_conflict.assignments, "=", ", ");
}
