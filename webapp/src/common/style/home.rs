pub const HOME_STYLES: &str = r#"
/* Hero */
.hero {
  background: var(--hero-gradient);
  color: var(--text-inverse);
  text-align: center;
  padding: var(--space-8) var(--space-5);
}

.hero h1 {
  font-size: clamp(32px, 6vw, 52px);
  line-height: 1.15;
  margin-bottom: var(--space-4);
}

.hero p {
  font-size: 18px;
  opacity: 0.9;
  max-width: 560px;
  margin: 0 auto var(--space-6);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  flex-wrap: wrap;
}

.hero-actions .btn-secondary {
  color: var(--text-inverse);
  border-color: rgba(255, 255, 255, 0.5);
}

.hero-actions .btn-secondary:hover:not(:disabled) {
  border-color: var(--text-inverse);
  color: var(--text-inverse);
}

/* Shared Section Layout */
.section {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-8) var(--space-5);
}

.section-title {
  text-align: center;
  font-size: 32px;
  margin-bottom: var(--space-2);
}

.section-subtitle {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

/* Stats Strip */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: var(--space-5);
}

.stat-card {
  text-align: center;
  padding: var(--space-5);
}

.stat-value {
  font-size: 36px;
  font-weight: 700;
  color: var(--primary);
}

.stat-label {
  color: var(--text-secondary);
  font-size: 14px;
}

/* Feature Cards */
.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-5);
}

.feature-icon {
  font-size: 32px;
  margin-bottom: var(--space-3);
}

.feature-card h3 {
  margin-bottom: var(--space-2);
}

.feature-card p {
  color: var(--text-secondary);
  font-size: 15px;
}

/* Pricing */
.pricing-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-5);
  align-items: stretch;
}

.pricing-card {
  display: flex;
  flex-direction: column;
  text-align: center;
}

.pricing-card.featured {
  border-color: var(--primary);
  box-shadow: 0 0 0 1px var(--primary), var(--shadow-md);
}

.pricing-tier {
  font-size: 14px;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-tertiary);
}

.pricing-price {
  font-size: 40px;
  font-weight: 700;
  margin: var(--space-3) 0;
}

.pricing-price span {
  font-size: 15px;
  font-weight: 400;
  color: var(--text-secondary);
}

.pricing-card ul {
  list-style: none;
  margin-bottom: var(--space-5);
  flex: 1;
}

.pricing-card li {
  padding: var(--space-2) 0;
  color: var(--text-secondary);
  font-size: 15px;
  border-bottom: 1px solid var(--border);
}

.pricing-card li:last-child {
  border-bottom: none;
}

/* Newsletter */
.newsletter {
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
}

.newsletter-form {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
  max-width: 480px;
  margin: 0 auto;
}

.newsletter-form .text-input {
  flex: 1;
}

@media (max-width: 768px) {
  .newsletter-form {
    flex-direction: column;
  }
}

/* Footer */
.site-footer {
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  padding: var(--space-6) var(--space-5);
  color: var(--text-secondary);
  font-size: 14px;
}

.site-footer .footer-grid {
  max-width: var(--container-width);
  margin: 0 auto var(--space-5);
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: var(--space-5);
}

.site-footer h4 {
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.site-footer ul {
  list-style: none;
}

.site-footer li a {
  display: inline-block;
  padding: var(--space-1) 0;
}

.site-footer li a:hover {
  color: var(--primary);
}

.site-footer .footer-legal {
  max-width: var(--container-width);
  margin: 0 auto;
  padding-top: var(--space-5);
  border-top: 1px solid var(--border);
  text-align: center;
  color: var(--text-tertiary);
}
"#;
