pub const HOME_STYLES: &str = r#"
/* Header and navigation */
.main-header {
  position: sticky;
  top: 0;
  z-index: 100;
  background-color: rgba(255, 255, 255, 0.95);
  box-shadow: 0 2px 5px rgba(0,0,0,0.1);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.main-nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  padding: 0 var(--space-6);
}

.school-brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--primary);
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: var(--space-2);
}

.nav-menu a {
  display: block;
  padding: var(--space-2) var(--space-3);
  color: var(--text-secondary);
  font-weight: 500;
  border-radius: var(--radius-sm);
}

.nav-menu a:hover {
  color: var(--primary);
  text-decoration: none;
}

.dropdown {
  position: relative;
}

.dropdown-menu {
  position: absolute;
  top: 100%;
  left: 0;
  min-width: 200px;
  list-style: none;
  background-color: var(--surface);
  border-radius: var(--radius-md);
  box-shadow: 0 8px 24px rgba(0,0,0,0.12);
  opacity: 0;
  visibility: hidden;
  transform: translateY(-10px);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.hamburger-menu {
  display: none;
  flex-direction: column;
  gap: 5px;
  cursor: pointer;
}

.hamburger-menu span {
  width: 26px;
  height: 3px;
  background-color: var(--primary);
  transition: transform var(--transition-normal);
}

.hamburger-menu.active span:nth-child(1) {
  transform: translateY(8px) rotate(45deg);
}

.hamburger-menu.active span:nth-child(2) {
  opacity: 0;
}

.hamburger-menu.active span:nth-child(3) {
  transform: translateY(-8px) rotate(-45deg);
}

/* Hero */
.hero-section {
  padding: var(--space-16) var(--space-6);
  text-align: center;
  color: white;
  background: linear-gradient(135deg, var(--primary-dark), var(--primary-light));
}

.hero-section h1 {
  font-size: 3rem;
  margin-bottom: var(--space-4);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.apply-btn,
.hero-actions button {
  padding: var(--space-3) var(--space-8);
  border: none;
  border-radius: var(--radius-md);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
}

.apply-btn {
  color: var(--neutral-900);
  background-color: var(--accent);
}

.apply-btn:hover {
  background-color: var(--accent-dark);
  text-decoration: none;
}

.hero-actions button {
  color: var(--primary);
  background-color: white;
}

/* Content sections */
.welcome-section,
.facilities-section,
.why-choose-section {
  padding: var(--space-12) var(--space-6);
  max-width: 1100px;
  margin: 0 auto;
}

.welcome-section h2,
.facilities-section h2,
.why-choose-section h2 {
  font-size: 2rem;
  color: var(--primary);
  margin-bottom: var(--space-4);
}

.welcome-section,
.facilities-section {
  border-radius: var(--radius-lg);
}

.facility-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
}

.facility-card {
  padding: var(--space-6);
  background-color: var(--neutral-50);
  border-radius: var(--radius-md);
  box-shadow: 0 2px 8px rgba(0,0,0,0.06);
}

.facility-card h3 {
  margin-bottom: var(--space-2);
}

.why-choose-section ul {
  list-style: none;
  display: grid;
  gap: var(--space-3);
}

/* Footer */
.main-footer {
  padding: var(--space-12) var(--space-6);
  color: var(--neutral-200);
  background-color: var(--primary-dark);
}

.main-footer h3 {
  color: white;
  margin-bottom: var(--space-3);
}

.main-footer p {
  margin-bottom: var(--space-2);
}
"#;
