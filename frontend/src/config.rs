/// Prefix the public assets are served under. Set `EVBUDDY_BASE_URL` at build
/// time when the site is deployed below the domain root.
pub fn get_base_url() -> &'static str {
    option_env!("EVBUDDY_BASE_URL").unwrap_or("/")
}

/// Resolves a path under the public asset directory against the base URL.
pub fn resolve_public(path: &str) -> String {
    join_base(get_base_url(), path)
}

fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_base_with_root_prefix() {
        assert_eq!(join_base("/", "images/hero-2.svg"), "/images/hero-2.svg");
    }

    #[test]
    fn join_base_does_not_double_slashes() {
        assert_eq!(join_base("/evbuddy/", "/PressAndNews/a.pdf"), "/evbuddy/PressAndNews/a.pdf");
        assert_eq!(join_base("/evbuddy", "PressAndNews/a.pdf"), "/evbuddy/PressAndNews/a.pdf");
    }

    #[test]
    fn join_base_with_absolute_origin() {
        assert_eq!(
            join_base("https://cdn.example.com/site/", "images/Evbuddy_logo.png"),
            "https://cdn.example.com/site/images/Evbuddy_logo.png"
        );
    }

    #[test]
    fn resolve_public_uses_configured_prefix() {
        let resolved = resolve_public("images/hero-3.svg");
        assert!(resolved.ends_with("/images/hero-3.svg"));
        assert!(resolved.starts_with(get_base_url().trim_end_matches('/')));
    }
}
