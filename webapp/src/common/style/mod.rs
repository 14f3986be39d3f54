use constcat::concat;

mod behavior;
mod home;
mod variables;

pub use behavior::BEHAVIOR_STYLES;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// Site style bundling
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
}

a {
  color: var(--primary);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    HOME_STYLES,
    BEHAVIOR_STYLES,
);
