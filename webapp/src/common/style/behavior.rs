// styles for the states the behavior layer toggles at runtime
pub const BEHAVIOR_STYLES: &str = r#"
/* Active navigation link */
.nav-menu a.active {
  color: var(--primary);
  background-color: rgba(30, 58, 138, 0.08);
}

/* Modal alert */
.custom-alert-modal {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: rgba(0, 0, 0, 0.5);
  transition: opacity var(--transition-normal) ease;
}

.custom-alert-content {
  max-width: 420px;
  width: 90%;
  padding: var(--space-8);
  text-align: center;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
}

.custom-alert-content h3 {
  margin-bottom: var(--space-4);
  color: var(--primary);
}

.custom-alert-content p {
  margin-bottom: var(--space-6);
  color: var(--text-secondary);
}

.alert-close-btn {
  padding: var(--space-2) var(--space-8);
  border: none;
  border-radius: var(--radius-md);
  color: white;
  background-color: var(--primary);
  cursor: pointer;
}

/* Button ripple */
.ripple {
  position: absolute;
  border-radius: 50%;
  background-color: rgba(255, 255, 255, 0.6);
  transform: scale(0);
  animation: ripple 600ms linear;
  pointer-events: none;
}

@keyframes ripple {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

/* Entrance animation
 *
 * a keyframe animation rather than a transition, so that the inline animation-delay on
 * each facility card staggers it and the section highlight keeps the transition slot */
.reveal {
  opacity: 0;
  transform: translateY(30px);
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
  animation: reveal-in 0.6s ease both;
}

@keyframes reveal-in {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* Section highlight */
.welcome-section,
.facilities-section,
.main-footer {
  transition: background-color 0.5s ease;
}

/* Desktop flyouts are opened with inline styles, mobile ones with the open class */
@media (max-width: 768px) {
  .hamburger-menu {
    display: flex;
  }

  .nav-menu {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: var(--space-4);
    background-color: var(--surface);
    box-shadow: 0 8px 16px rgba(0,0,0,0.1);
  }

  .nav-menu.mobile-active {
    display: flex;
  }

  .dropdown-menu {
    display: none;
    position: static;
    box-shadow: none;
    transform: none;
  }

  .dropdown-menu.open {
    display: block;
    opacity: 1 !important;
    visibility: visible !important;
    pointer-events: auto !important;
  }

  .hero-section h1 {
    font-size: 2rem;
  }

  .hero-actions {
    flex-direction: column;
    align-items: center;
  }
}
"#;
