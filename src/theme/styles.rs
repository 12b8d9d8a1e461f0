//! Global CSS styles for TIL.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #f4f5f7;
  --surface: #ffffff;
  --border: #e0e3e8;

  /* Brand */
  --accent: #1976d2;
  --accent-dark: #115293;
  --accent-contrast: #ffffff;

  /* Text */
  --text-primary: #1f2328;
  --text-secondary: rgba(31, 35, 40, 0.75);
  --text-muted: rgba(31, 35, 40, 0.55);

  /* Semantic */
  --danger: #d32f2f;
  --danger-bg: #fdecea;
  --warning-bg: #fff4e5;

  /* Typography */
  --font-sans: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: var(--accent);
  text-decoration: none;
}

/* === Head Bar === */
.head-bar {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1.5rem;
  background: var(--accent);
  color: var(--accent-contrast);
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
}

.brand {
  flex-grow: 1;
  font-family: var(--font-mono);
  font-weight: 700;
  font-size: 1.25rem;
  letter-spacing: 0.3rem;
  color: inherit;
}

.head-account {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.head-bar .btn-ghost {
  color: inherit;
}

/* === Layout === */
.container {
  max-width: 720px;
  margin: 2.5rem auto;
  padding: 0 1rem;
}

.fatal {
  color: var(--danger);
  margin-top: 1rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1.25rem;
  border-radius: 4px;
  font-family: var(--font-sans);
  font-size: 0.875rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.03em;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: none;
  color: var(--accent-contrast);
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent-dark);
}

.btn-outline {
  background: transparent;
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn-ghost {
  background: transparent;
  border: none;
  color: var(--accent);
}

button:disabled {
  opacity: 0.6;
  cursor: default;
}

.spinner {
  width: 0.9em;
  height: 0.9em;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Inputs === */
.input-field {
  width: 100%;
  padding: 0.75rem;
  border: 1px solid var(--border);
  border-radius: 4px;
  background: var(--surface);
  font-family: var(--font-sans);
  font-size: 1rem;
  color: var(--text-primary);
}

.input-field:focus {
  outline: 2px solid var(--accent);
  border-color: transparent;
}

.textarea {
  resize: vertical;
  min-height: 4rem;
}

/* === Post Form === */
.post-form {
  margin-bottom: 1.5rem;
}

.post-form-actions {
  display: flex;
  align-items: center;
  justify-content: flex-end;
  gap: 1rem;
  margin-top: 1rem;
}

.post-counter {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Banners === */
.banner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.75rem 1rem;
  border-radius: 4px;
  margin: 1rem 0;
}

.banner-info {
  background: var(--warning-bg);
}

.banner-error {
  background: var(--danger-bg);
  color: var(--danger);
}

/* === Tabs === */
.tab-bar {
  display: flex;
  justify-content: center;
  border-bottom: 1px solid var(--border);
}

.tab {
  padding: 0.75rem 1.5rem;
  background: transparent;
  border: none;
  border-bottom: 2px solid transparent;
  font-size: 0.875rem;
  text-transform: uppercase;
  color: var(--text-secondary);
  cursor: pointer;
}

.tab-active {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

/* === Timeline === */
.timeline {
  margin-top: 1.5rem;
}

.post-card {
  display: flex;
  gap: 1rem;
  padding: 1rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.post-body {
  flex: 1;
  min-width: 0;
}

.post-meta {
  display: flex;
  align-items: baseline;
  gap: 1rem;
}

.post-author {
  font-weight: 500;
}

.post-age {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.post-content {
  white-space: pre-wrap;
  overflow-wrap: anywhere;
}

.timeline-empty {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
}

/* === Letter Avatar === */
.letter-avatar {
  flex-shrink: 0;
  border-radius: 50%;
  text-align: center;
  color: #ffffff;
  font-weight: 500;
  user-select: none;
}

/* === Profile === */
.profile-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  background: var(--surface);
  border-radius: 4px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

.profile-name {
  flex-grow: 1;
  font-size: 2rem;
  font-weight: 400;
  overflow-wrap: anywhere;
}

.profile-lists {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin-top: 1.5rem;
}

.profile-list h2 {
  font-size: 1rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.profile-list ul {
  list-style: none;
}

.profile-list li {
  padding: 0.25rem 0;
}

.section-title {
  margin-top: 2rem;
  font-size: 1.25rem;
  font-weight: 500;
}
"#;
