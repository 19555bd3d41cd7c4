pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --primary-dark: #2563EB;     /* Darker blue for active states */
  --accent: #8B5CF6;           /* Purple accent for highlights */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #10B981;
  --warning: #F59E0B;
  --error: #EF4444;
  --info: #3B82F6;

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --surface-sunken: var(--neutral-50);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 60px;
  --sidebar-width: 280px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 24px;
  --space-6: 32px;
  --space-8: 48px;

  /* Radii */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.10);
  --shadow-lg: 0 20px 60px rgba(0, 0, 0, 0.20);

  /* Hero gradient shared with the offline preview document */
  --hero-gradient: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
}

/* Dark palette, keyed off the attribute the theme toggle writes */
[data-theme="dark"] {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-sunken: #0B0F19;

  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);

  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.40);
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.50);
  --shadow-lg: 0 20px 60px rgba(0, 0, 0, 0.60);
}
"#;
