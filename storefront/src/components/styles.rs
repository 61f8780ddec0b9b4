pub const FONT_AWESOME_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

pub const STOREFRONT_STYLES: &str = r#"
:root,
:root[data-theme="light"] {
    --bg-primary: #f7fafc;
    --bg-secondary: #ffffff;
    --text-primary: #2d3748;
    --text-secondary: #4a5568;
    --accent-color: #667eea;
    --accent-gradient: linear-gradient(135deg, #667eea, #764ba2);
    --border-color: #e2e8f0;
    --card-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
    --success-color: #48bb78;
}

:root[data-theme="dark"] {
    --bg-primary: #1a202c;
    --bg-secondary: #2d3748;
    --text-primary: #f7fafc;
    --text-secondary: #cbd5e0;
    --accent-color: #7f9cf5;
    --accent-gradient: linear-gradient(135deg, #7f9cf5, #9f7aea);
    --border-color: #4a5568;
    --card-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
    --success-color: #68d391;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
    transition: background 0.3s ease, color 0.3s ease, opacity 0.3s ease;
}

.storefront-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem 2rem;
}

.storefront-header h1 {
    margin: 0;
    background: var(--accent-gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.theme-toggle {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    background: var(--bg-secondary);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: 999px;
    cursor: pointer;
}

.products-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
    padding: 2rem;
    max-width: 1200px;
    margin: 0 auto;
}

.product-card {
    background: var(--bg-secondary);
    border-radius: 20px;
    padding: 2rem;
    box-shadow: var(--card-shadow);
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.product-image {
    font-size: 3rem;
    color: var(--accent-color);
    text-align: center;
    margin-bottom: 1rem;
}

.product-title {
    margin: 0 0 0.5rem 0;
}

.product-description {
    color: var(--text-secondary);
    line-height: 1.5;
}

.product-price {
    font-size: 1.75rem;
    font-weight: 700;
    color: var(--accent-color);
    margin: 1rem 0;
}

.product-features {
    list-style: none;
    padding: 0;
    margin: 0 0 1.5rem 0;
}

.product-features li {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0;
    color: var(--text-secondary);
}

.product-features li i {
    color: var(--success-color);
}

.buy-button {
    width: 100%;
    padding: 0.9rem;
    border: none;
    border-radius: 12px;
    background: var(--accent-gradient);
    color: white;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.2s ease, opacity 0.2s ease;
}

.buy-button:disabled {
    cursor: default;
}

.buy-button.loading {
    opacity: 0.85;
}

@media (max-width: 640px) {
    .storefront-header {
        padding: 1rem;
    }

    .products-grid {
        padding: 1rem;
        gap: 1rem;
    }
}
"#;
