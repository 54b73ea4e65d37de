//! Global CSS styles for the listing page.
//!
//! Class names follow the default page config selectors, so the stock
//! document renders styled without extra markup.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --page-bg: #e3e6e6;
  --card-bg: #ffffff;
  --nav-bg: #131921;
  --panel-bg: #232f3e;
  --footer-bg: #37475a;

  /* Accents */
  --accent: #febd69;
  --accent-hover: #f3a847;
  --link: #007185;

  /* Text */
  --text-primary: #0f1111;
  --text-inverse: #ffffff;
  --text-muted: #565959;

  /* Typography */
  --font-sans: 'Segoe UI', Arial, sans-serif;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

/* Root container holds keyboard focus; no visible ring */
.shopfront-root {
  min-height: 100vh;
}

.shopfront-root:focus {
  outline: none;
}

/* === Navigation Bar === */
.navbar {
  display: flex;
  align-items: center;
  gap: var(--space-md);
  height: 60px;
  padding: 0 var(--space-md);
  background: var(--nav-bg);
  color: var(--text-inverse);
}

.nav-logo {
  font-size: 1.4rem;
  font-weight: 700;
  letter-spacing: 0.02em;
}

.nav-search {
  display: flex;
  flex: 1;
  height: 40px;
  border-radius: 4px;
  overflow: hidden;
}

.searchinput {
  flex: 1;
  border: none;
  padding: 0 var(--space-sm);
  font-size: 1rem;
  font-family: inherit;
}

.searchinput:focus {
  outline: 3px solid var(--accent);
  outline-offset: -3px;
}

.searchicon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 45px;
  background: var(--accent);
  color: var(--text-primary);
}

.searchicon:hover {
  background: var(--accent-hover);
}

.nav-cart {
  font-weight: 700;
}

/* === Panel === */
.panel {
  display: flex;
  align-items: center;
  gap: var(--space-md);
  padding: var(--space-xs) var(--space-md);
  background: var(--panel-bg);
  color: var(--text-inverse);
  font-size: 0.9rem;
}

.panelall {
  font-weight: 700;
  white-space: nowrap;
}

.panelops {
  display: flex;
  gap: var(--space-md);
}

.panelops p {
  margin: 0;
  padding: var(--space-xs) 0;
}

/* === Hero === */
.hero-section {
  padding: var(--space-lg) var(--space-md);
  background: linear-gradient(180deg, #a8d8ea 0%, var(--page-bg) 100%);
}

.hero-section h1 {
  margin: 0;
  font-size: 2rem;
}

/* === Shop Grid === */
.shop {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-md);
  padding: var(--space-md);
}

.box {
  background: var(--card-bg);
  padding: var(--space-md);
}

.boxcontent h2 {
  margin: 0 0 var(--space-sm);
  font-size: 1.25rem;
}

.boximg {
  height: 280px;
  border-radius: 2px;
}

.boxcontent > p {
  margin: var(--space-sm) 0 0;
  color: var(--link);
  font-size: 0.9rem;
}

.boxcontent > p:hover {
  text-decoration: underline;
}

/* === Footer === */
footer {
  margin-top: var(--space-lg);
  color: var(--text-inverse);
}

.footpanel1 {
  padding: var(--space-md);
  background: var(--footer-bg);
  text-align: center;
  font-size: 0.9rem;
}

.footpanel1:hover {
  background: #485769;
}

.footpanel4 {
  padding: var(--space-md);
  background: var(--nav-bg);
  text-align: center;
  font-size: 0.8rem;
}

.footpanel4 p {
  margin: 0;
}

/* === Responsive === */
@media (max-width: 768px) {
  .panelops {
    display: none;
  }

  .nav-cart {
    display: none;
  }

  .hero-section h1 {
    font-size: 1.4rem;
  }
}
"#;
