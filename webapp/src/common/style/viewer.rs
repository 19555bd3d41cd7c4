pub const VIEWER_STYLES: &str = r#"
.viewer-page {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-5);
}

.viewer-page > h1 {
  font-size: 28px;
  margin-bottom: var(--space-1);
}

.viewer-intro {
  color: var(--text-secondary);
  margin-bottom: var(--space-5);
}

/* Toolbar */
.viewer-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  gap: var(--space-5);
  padding: var(--space-4);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-5);
}

.toolbar-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.toolbar-group.grow {
  flex: 1;
  min-width: 220px;
}

.toolbar-label {
  font-size: 12px;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-tertiary);
}

/* Device Selection */
.device-buttons {
  display: flex;
  gap: var(--space-2);
}

.device-btn {
  padding: var(--space-2) var(--space-4);
  background-color: var(--surface);
  color: var(--text-secondary);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font-size: 14px;
  font-weight: 500;
  cursor: pointer;
  transition: background-color 0.2s ease, border-color 0.2s ease,
              color 0.2s ease;
}

.device-btn:hover {
  border-color: var(--primary);
  color: var(--text-primary);
}

.device-btn.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

/* Address Bar */
.address-form {
  display: flex;
  gap: var(--space-2);
}

.address-form .text-input {
  flex: 1;
}

/* Zoom */
.zoom-controls {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.zoom-btn {
  width: 32px;
  height: 32px;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background-color: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font-size: 16px;
  cursor: pointer;
}

.zoom-btn:hover:not(:disabled) {
  border-color: var(--primary);
}

.zoom-btn:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

.zoom-level {
  min-width: 52px;
  text-align: center;
  font-variant-numeric: tabular-nums;
  font-weight: 600;
}

/* Preview Stage */
.frame-stage {
  display: flex;
  justify-content: center;
  padding: var(--space-6) var(--space-4);
  background-color: var(--surface-sunken);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  overflow: auto;
}

.frame-shell {
  flex-shrink: 0;
  background-color: var(--neutral-900);
  border-radius: 24px;
  padding: 12px;
  box-shadow: var(--shadow-lg);
  transform-origin: top center;
  transition: width 0.3s ease, height 0.3s ease, transform 0.3s ease;
}

.preview-frame {
  width: 100%;
  height: 100%;
  border: none;
  border-radius: 14px;
  background-color: #FFFFFF;
}

/* Status Line */
.viewer-status {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-3);
  margin-top: var(--space-4);
  font-size: 14px;
  color: var(--text-secondary);
}

.viewer-status .status-address {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
  max-width: 60%;
}

@media (max-width: 768px) {
  .viewer-toolbar {
    flex-direction: column;
    align-items: stretch;
  }

  .viewer-status .status-address {
    max-width: 100%;
  }
}
"#;
