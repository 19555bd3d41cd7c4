pub mod components;
pub mod home;
pub mod variables;
pub mod viewer;

use components::BASE_COMPONENTS;
use variables::CSS_VARIABLES;

pub use home::HOME_STYLES;
pub use viewer::VIEWER_STYLES;

const GLOBAL_RESETS: &str = r#"
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto,
               'Helvetica Neue', Arial, sans-serif;
  background-color: var(--background);
  color: var(--text-primary);
  line-height: 1.6;
  transition: background-color 0.3s ease, color 0.3s ease;
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: inherit;
  text-decoration: none;
}

main {
  min-height: calc(100vh - var(--header-height));
}
"#;

const APP_CHROME: &str = r#"
/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 100;
  height: var(--header-height);
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
}

.site-header-inner {
  max-width: var(--container-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 var(--space-5);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-5);
}

.logo {
  font-size: 20px;
  font-weight: 700;
  color: var(--primary);
  white-space: nowrap;
}

/* Primary Navigation */
.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-5);
  list-style: none;
}

.nav-links a {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) 0;
  border-bottom: 2px solid transparent;
  transition: color 0.2s ease, border-color 0.2s ease;
}

.nav-links a:hover {
  color: var(--text-primary);
}

.nav-links a.active {
  color: var(--primary);
  border-bottom-color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.theme-toggle,
.sidebar-toggle {
  width: 36px;
  height: 36px;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font-size: 16px;
  cursor: pointer;
  color: var(--text-primary);
  transition: border-color 0.2s ease, background-color 0.2s ease;
}

.theme-toggle:hover,
.sidebar-toggle:hover {
  border-color: var(--primary);
  background-color: var(--surface-sunken);
}

/* Hamburger, shown on narrow viewports only */
.menu-toggle {
  display: none;
  flex-direction: column;
  justify-content: center;
  gap: 5px;
  width: 36px;
  height: 36px;
  background: none;
  border: none;
  cursor: pointer;
}

.menu-bar {
  width: 22px;
  height: 2px;
  margin: 0 auto;
  background-color: var(--text-primary);
  border-radius: var(--radius-full);
  transition: transform 0.3s ease, opacity 0.3s ease;
}

.menu-toggle.active .menu-bar:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.menu-toggle.active .menu-bar:nth-child(2) {
  opacity: 0;
}

.menu-toggle.active .menu-bar:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

@media (max-width: 768px) {
  .menu-toggle {
    display: flex;
  }

  .nav-links {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    display: none;
    flex-direction: column;
    align-items: stretch;
    gap: 0;
    background-color: var(--surface);
    border-bottom: 1px solid var(--border);
    box-shadow: var(--shadow-md);
  }

  .nav-links.open {
    display: flex;
  }

  .nav-links a {
    display: block;
    padding: var(--space-4) var(--space-5);
    border-bottom: 1px solid var(--border);
  }

  .nav-links a.active {
    border-bottom-color: var(--border);
    background-color: var(--surface-sunken);
  }
}

/* Sidebar Panel */
.sidebar-overlay {
  position: fixed;
  inset: 0;
  z-index: 150;
  background-color: rgba(0, 0, 0, 0.45);
}

.sidebar {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 200;
  width: var(--sidebar-width);
  max-width: 85vw;
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border-left: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
  animation: slide-in 0.3s ease-out;
}

.sidebar-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4) var(--space-5);
  border-bottom: 1px solid var(--border);
}

.sidebar-header h2 {
  font-size: 18px;
  color: var(--text-primary);
}

.sidebar-close {
  width: 32px;
  height: 32px;
  background: none;
  border: none;
  font-size: 22px;
  line-height: 1;
  color: var(--text-secondary);
  cursor: pointer;
}

.sidebar-close:hover {
  color: var(--text-primary);
}

.sidebar-body {
  flex: 1;
  overflow-y: auto;
  padding: var(--space-5);
}

.sidebar-body h3 {
  font-size: 13px;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-tertiary);
  margin-bottom: var(--space-3);
}

.sidebar-body ul {
  list-style: none;
  margin-bottom: var(--space-6);
}

.sidebar-body li a {
  display: block;
  padding: var(--space-2) 0;
  color: var(--text-secondary);
}

.sidebar-body li a:hover {
  color: var(--primary);
}

/* Toast Notifications */
.toast-stack {
  position: fixed;
  top: calc(var(--header-height) + var(--space-4));
  right: var(--space-4);
  z-index: 300;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  pointer-events: none;
}

.toast {
  min-width: 240px;
  max-width: 360px;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  color: var(--text-inverse);
  font-size: 14px;
  font-weight: 500;
  box-shadow: var(--shadow-md);
  animation: slide-in 0.3s ease-out;
}

.toast-success {
  background-color: var(--success);
}

.toast-error {
  background-color: var(--error);
}

.toast-info {
  background-color: var(--info);
}

@media (max-width: 768px) {
  .toast-stack {
    left: var(--space-4);
    right: var(--space-4);
  }

  .toast {
    max-width: none;
  }
}
"#;

pub const APP_STYLES: &str =
    constcat::concat!(GLOBAL_RESETS, CSS_VARIABLES, BASE_COMPONENTS, APP_CHROME);
