//! Server-side HTML templates.

use crate::db::User;
use tera::{Context, Tera};

/// Template used by the user listing page.
pub const USERS_TEMPLATE: &str = "users.html";

/// Loads every `.html` template under `dir`.
///
/// # Errors
/// Returns error if a template fails to parse or the user listing template
/// is missing.
pub fn init_templates(dir: &str) -> Result<Tera, tera::Error> {
    let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
    let tera = Tera::new(&glob)?;

    if !tera.get_template_names().any(|name| name == USERS_TEMPLATE) {
        return Err(tera::Error::msg(format!(
            "template {USERS_TEMPLATE} not found in {dir}"
        )));
    }

    Ok(tera)
}

/// Renders the user listing page.
///
/// # Errors
/// Returns error if rendering fails.
pub fn render_users(tera: &Tera, users: &[User]) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("users", users);
    tera.render(USERS_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load() -> Tera {
        init_templates(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
            .expect("templates should load")
    }

    fn user(id: i32, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_render_users() {
        let tera = load();
        let users = vec![
            user(1, "Alice", "alice@x.com"),
            user(2, "Bob", "bob@x.com"),
        ];

        let html = render_users(&tera, &users).expect("should render");
        assert!(html.contains("Alice"));
        assert!(html.contains("Bob"));
        assert!(html.contains("alice@x.com"));
        assert!(html.contains("bob@x.com"));
        assert_eq!(html.matches("class=\"user\"").count(), 2);
        assert!(!html.contains("No users found."));
    }

    #[test]
    fn test_render_preserves_row_order() {
        let tera = load();
        let users = vec![user(2, "Bob", "bob@x.com"), user(1, "Alice", "alice@x.com")];

        let html = render_users(&tera, &users).expect("should render");
        let bob = html.find("Bob").expect("Bob rendered");
        let alice = html.find("Alice").expect("Alice rendered");
        assert!(bob < alice);
    }

    #[test]
    fn test_render_empty_listing() {
        let tera = load();

        let html = render_users(&tera, &[]).expect("should render");
        assert_eq!(html.matches("class=\"user\"").count(), 0);
        assert!(html.contains("No users found."));
    }

    #[test]
    fn test_render_escapes_html() {
        let tera = load();
        let users = vec![user(3, "<script>alert(1)</script>", "eve@x.com")];

        let html = render_users(&tera, &users).expect("should render");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_missing_template_dir() {
        let result = init_templates("/nonexistent/splitwise/templates");
        assert!(result.is_err());
    }
}
