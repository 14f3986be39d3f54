pub const CSS_VARIABLES: &str = r#"
:root {
  /* School palette */
  --primary: #1E3A8A;          /* Deep school blue */
  --primary-light: #3B5BDB;    /* Hover states */
  --primary-dark: #172554;     /* Footer and pressed states */
  --accent: #F59E0B;           /* Saffron accent for calls to action */
  --accent-dark: #D97706;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-500: #6B7280;
  --neutral-700: #374151;
  --neutral-900: #111827;

  --background: #FFFFFF;
  --surface: #FFFFFF;
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-muted: var(--neutral-500);

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;

  /* Shape and motion */
  --radius-sm: 0.25rem;
  --radius-md: 0.5rem;
  --radius-lg: 1rem;
  --header-height: 72px;
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}
"#;
