//! Tera template environment for the server-rendered pages.
//!
//! Templates are embedded at compile time so rendering does not depend on
//! the process working directory.

use tera::Tera;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const VIEW_TEMPLATE: &str = include_str!("../templates/view.html");

/// Build the template environment with every page registered.
pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index.html", INDEX_TEMPLATE),
        ("view.html", VIEW_TEMPLATE),
    ])?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pages_register() {
        let tera = build().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        assert!(names.contains(&"index.html"));
        assert!(names.contains(&"view.html"));
    }
}
