//! Global CSS styles for the portal client.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f4f5f7;
  --border: #d0d5dd;

  /* BRAND */
  --primary: #2f6fed;
  --primary-dark: #1f55c4;
  --primary-glow: rgba(47, 111, 237, 0.2);

  /* TEXT */
  --text-primary: #1f2430;
  --text-secondary: #475467;
  --text-muted: #98a2b3;

  /* SEMANTIC */
  --danger: #d92d20;
  --success: #12b76a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

.w-full {
  width: 100%;
}

/* === Pages === */
.page {
  max-width: 420px;
  margin: 3rem auto;
  padding: 2rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
}

.page-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.page-blurb {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.page-loading {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  padding: 4rem 0;
}

.page-loading-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--primary);
  animation: pulse 1s ease-in-out infinite;
}


@keyframes pulse {
  0%, 100% { opacity: 0.3; }
  50% { opacity: 1; }
}

.page-load-failed {
  max-width: 420px;
  margin: 3rem auto;
  padding: 1.5rem;
  border: 1px solid var(--danger);
  border-radius: 8px;
  background: var(--surface);
}

.form-failed {
  padding: 0.75rem 1rem;
  border: 1px solid var(--danger);
  border-radius: 6px;
  font-size: var(--text-sm);
}

.page-link {
  margin-top: 1rem;
  font-size: var(--text-sm);
}

/* === Auth Forms === */
.auth-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.auth-links {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
}

.auth-alt {
  text-align: center;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.auth-notice {
  padding: 0.75rem 1rem;
  border-left: 3px solid var(--success);
  background: var(--surface-muted);
  font-size: var(--text-sm);
}

/* === Home === */
.home-panel {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.home-greeting {
  font-size: var(--text-lg);
  font-weight: 500;
}

.home-summary {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.625rem 1.25rem;
  border-radius: 6px;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-contained {
  background: var(--primary);
  border: 1px solid var(--primary);
  color: var(--surface);
}

.btn-contained:hover:not(:disabled) {
  background: var(--primary-dark);
  border-color: var(--primary-dark);
}

.btn-outlined {
  background: transparent;
  border: 1px solid var(--primary);
  color: var(--primary);
}

.btn-outlined:hover:not(:disabled) {
  background: var(--primary-glow);
}

.btn-full {
  width: 100%;
}

/* === Input Fields === */
.input-wrapper {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 500;
}

.input-mandatory {
  margin-left: 0.125rem;
  color: var(--danger);
}

.input-error {
  color: var(--danger);
  font-size: var(--text-xs);
}

.input-block {
  position: relative;
  display: inline-flex;
  align-items: center;
}

.input-full {
  display: flex;
  width: 100%;
}

.input {
  width: 100%;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input::placeholder {
  color: var(--text-muted);
}

.input:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-glow);
}

.input:disabled {
  background: var(--surface-muted);
  cursor: not-allowed;
}

.input-wrapper-error .input {
  border-color: var(--danger);
}

.input-small { padding: 0.375rem 0.625rem; font-size: var(--text-sm); }
.input-medium { padding: 0.625rem 0.875rem; font-size: var(--text-base); }
.input-large { padding: 0.875rem 1rem; font-size: var(--text-lg); }

.input-icon {
  position: absolute;
  display: flex;
  color: var(--text-muted);
  pointer-events: none;
}

.input-icon-start { left: 0.75rem; }
.input-icon-end { right: 0.75rem; }

.input-with-icon-start { padding-left: 2.5rem; }
.input-with-icon-end { padding-right: 2.5rem; }

.input-password { padding-right: 2.5rem; }

.input-password-icon {
  position: absolute;
  right: 0.75rem;
  display: flex;
  color: var(--text-secondary);
  cursor: pointer;
}

.input-currency {
  font-variant-numeric: tabular-nums;
}

/* === Phone Field === */
.phone-field {
  position: relative;
  gap: 0.5rem;
}

.phone-country {
  position: relative;
}

.phone-country-button {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  height: 100%;
  padding: 0.625rem 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 6px;
  font-family: var(--font-sans);
  cursor: pointer;
}

.phone-country-code {
  text-transform: uppercase;
  font-weight: 500;
}

.phone-country-dial {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.phone-country-list {
  position: absolute;
  top: calc(100% + 0.25rem);
  left: 0;
  z-index: 10;
  width: 260px;
  max-height: 240px;
  overflow-y: auto;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 6px;
  box-shadow: 0 8px 24px rgba(16, 24, 40, 0.12);
}

.phone-country-search {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: none;
  border-bottom: 1px solid var(--border);
  font-family: var(--font-sans);
}

.phone-country-search:focus {
  outline: none;
}

.phone-country-option {
  display: flex;
  justify-content: space-between;
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: transparent;
  border: none;
  text-align: left;
  cursor: pointer;
}

.phone-country-option:hover,
.phone-country-option.selected {
  background: var(--primary-glow);
}

.input-phone.invalid-number {
  border-color: var(--danger);
}
"#;
