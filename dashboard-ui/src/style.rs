pub const GLOBAL_CSS: &str = r#"
.app {
  --bg: #f8fafc;
  --panel: #ffffff;
  --border: #e5e7eb;
  --text: #0f172a;
  --text-muted: #64748b;
  --primary: #2563eb;
  --primary-text: #ffffff;
  --surface-hover: #f1f5f9;
  --positive: #22c55e;
  --radius: 8px;
  --sidebar-width: 16rem;
  --topbar-height: 4rem;
  --transition: 200ms ease-in-out;
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  font-family: "Inter", system-ui, -apple-system, sans-serif;
}

.app.theme-dark {
  --bg: #020617;
  --panel: #0f172a;
  --border: #1e293b;
  --text: #f1f5f9;
  --text-muted: #94a3b8;
  --primary: #3b82f6;
  --surface-hover: #1e293b;
}

.sidebar {
  position: fixed;
  inset: 0 auto 0 0;
  z-index: 50;
  width: var(--sidebar-width);
  background: var(--panel);
  border-right: 1px solid var(--border);
  transition: transform var(--transition);
}
.sidebar-open { transform: translateX(0); }
.sidebar-closed { transform: translateX(-100%); }

.sidebar-brand {
  height: var(--topbar-height);
  display: flex;
  align-items: center;
  justify-content: center;
  border-bottom: 1px solid var(--border);
}
.sidebar-brand h1 { margin: 0; font-size: 1.25rem; color: var(--primary); }

.sidebar-nav { margin-top: 1.5rem; padding: 0 1rem; display: flex; flex-direction: column; gap: 0.25rem; }

.nav-link {
  display: flex;
  align-items: center;
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
  text-decoration: none;
  transition: background var(--transition), color var(--transition);
}
.nav-link:hover { background: var(--surface-hover); }
.nav-link-active, .nav-link-active:hover { background: var(--primary); color: var(--primary-text); }
.nav-icon { margin-right: 0.75rem; }

.content { margin-left: 0; transition: margin-left var(--transition); }
.content-shifted { margin-left: var(--sidebar-width); }

.topbar {
  height: var(--topbar-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1rem;
  background: var(--panel);
  border-bottom: 1px solid var(--border);
}
.topbar-user { display: flex; align-items: center; gap: 1rem; }
.user-name { font-size: 0.875rem; color: var(--text-muted); }
.avatar {
  width: 2rem;
  height: 2rem;
  border-radius: 999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--primary);
  color: var(--primary-text);
  font-size: 0.8rem;
}

.icon-button {
  width: 2.5rem;
  height: 2.5rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: var(--radius);
  background: transparent;
  color: var(--text);
  cursor: pointer;
}
.icon-button:hover { background: var(--surface-hover); }

.icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }

.page { padding: 1.5rem; }
.landing { display: flex; flex-direction: column; gap: 1.5rem; }
.page-title { margin: 0; font-size: 1.5rem; font-weight: 700; }
.muted { color: var(--text-muted); }

.stat-grid { display: grid; gap: 1.5rem; }
@media (min-width: 768px) { .stat-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .stat-grid { grid-template-columns: repeat(3, 1fr); } }

.card { background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); }
.card-header { padding: 1.5rem 1.5rem 0.5rem; }
.stat-header { display: flex; align-items: center; justify-content: space-between; }
.stat-header .icon { width: 1rem; height: 1rem; }
.card-title { margin: 0; font-size: 0.875rem; font-weight: 500; }
.card-body { padding: 0 1.5rem 1.5rem; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-trend { margin: 0.25rem 0 0; font-size: 0.75rem; color: var(--positive); }
"#;
