//! PageRenderer - server-side HTML rendering
//!
//! Every page of the site is rendered from a Tera template embedded in the
//! binary. Handlers convert models into `views` structs first, so templates
//! only ever see display-ready strings.

use crate::models;
use crate::views;
use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Create a new PageRenderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("catalog.html", CATALOG_TEMPLATE)
            .context("Failed to add catalog template")?;
        tera.add_raw_template("checkout.html", CHECKOUT_TEMPLATE)
            .context("Failed to add checkout template")?;
        tera.add_raw_template("admin_list.html", ADMIN_LIST_TEMPLATE)
            .context("Failed to add admin list template")?;
        tera.add_raw_template("admin_edit.html", ADMIN_EDIT_TEMPLATE)
            .context("Failed to add admin edit template")?;
        tera.add_raw_template("terms.html", TERMS_TEMPLATE)
            .context("Failed to add terms template")?;
        tera.add_raw_template("privacy.html", PRIVACY_TEMPLATE)
            .context("Failed to add privacy template")?;

        Ok(Self { tera })
    }

    pub fn catalog(&self, app_name: &str, cards: &[views::listing::Card]) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("app_name", app_name);
        context.insert("cards", cards);

        self.tera
            .render("catalog.html", &context)
            .context("Failed to render catalog page")
    }

    pub fn checkout(&self, listing: &views::listing::Checkout) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("listing", listing);

        self.tera
            .render("checkout.html", &context)
            .context("Failed to render checkout page")
    }

    pub fn admin_list(
        &self,
        app_name: &str,
        admin_key: &str,
        rows: &[views::listing::Row],
    ) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("app_name", app_name);
        context.insert("admin_key", admin_key);
        context.insert("rows", rows);
        context.insert("categories", &category_labels());
        context.insert("statuses", &status_labels());

        self.tera
            .render("admin_list.html", &context)
            .context("Failed to render admin list page")
    }

    pub fn admin_edit(&self, admin_key: &str, listing: &views::listing::Form) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("admin_key", admin_key);
        context.insert("listing", listing);
        context.insert("categories", &category_labels());
        context.insert("statuses", &status_labels());

        self.tera
            .render("admin_edit.html", &context)
            .context("Failed to render admin edit page")
    }

    pub fn terms(&self, app_name: &str) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("app_name", app_name);

        self.tera
            .render("terms.html", &context)
            .context("Failed to render terms page")
    }

    pub fn privacy(&self, app_name: &str) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("app_name", app_name);

        self.tera
            .render("privacy.html", &context)
            .context("Failed to render privacy page")
    }
}

fn category_labels() -> Vec<&'static str> {
    models::Category::ALL
        .iter()
        .map(models::Category::label)
        .collect()
}

fn status_labels() -> Vec<&'static str> {
    models::Status::ALL.iter().map(models::Status::label).collect()
}

const CATALOG_TEMPLATE: &str = r#"<!doctype html><html><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{{ app_name }}</title>
<style>
:root{--bg:#0b0c10;--card:#111317;--fg:#e8e8f0;--muted:#9aa3b2;--accent:#6ee7b7}
*{box-sizing:border-box} body{margin:0;background:var(--bg);color:var(--fg);font:16px system-ui,Segoe UI,Roboto}
header{display:flex;justify-content:space-between;align-items:center;padding:16px 20px;border-bottom:1px solid #151820}
a.logo{font-weight:800;color:var(--fg);text-decoration:none}
.wrap{max-width:1100px;margin:0 auto;padding:20px}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:16px}
.card{background:var(--card);border-radius:14px;overflow:hidden;text-decoration:none;color:inherit;border:1px solid #1c212b;display:flex;flex-direction:column}
.card .img{width:100%;height:150px;background:#0f1218 center/cover no-repeat}
.card .info{padding:12px}
.meta{display:flex;align-items:center;color:var(--muted);font-size:13px;margin:2px 0 6px}
.badge{background:#1a2130;border:1px solid #283041;border-radius:999px;padding:3px 8px;margin-right:8px}
.dot{width:4px;height:4px;border-radius:50%;background:#394150;margin:0 8px}
.price{font-weight:700;margin:10px 0 12px}
button{background:var(--accent);border:0;padding:10px 12px;border-radius:10px;font-weight:700;cursor:pointer}
footer{opacity:.7;font-size:12px;text-align:center;margin:20px 0}
nav a{color:#9aa3b2;margin-left:12px;text-decoration:none}
</style></head><body>
<header>
  <a class="logo" href="/">{{ app_name }}</a>
  <nav><a href="/terms">Terms</a><a href="/privacy">Privacy</a><a href="/admin">Admin</a></nav>
</header>
<div class="wrap"><h2>Live Listings</h2><div class="grid">
{%- if cards %}
{%- for card in cards %}
  <a class="card" href="/checkout?id={{ card.id | urlencode_strict }}">
    <div class="img" style="background-image:url('{{ card.logo_url }}')"></div>
    <div class="info">
      <h3>{{ card.title }}</h3>
      <div class="meta">
        <span class="badge">{{ card.category }}</span>
        {%- if card.location %}<span class="dot"></span><span>{{ card.location }}</span>{% endif %}
      </div>
      <div class="price">${{ card.price }}{% if card.equity_percent %} &bull; {{ card.equity_percent }}% equity{% endif %}</div>
      <button>Buy / Invest</button>
    </div>
  </a>
{%- endfor %}
{%- else %}
  <p>No listings yet.</p>
{%- endif %}
</div></div>
<footer>5% platform fee shown at checkout &bull; USD only</footer>
</body></html>
"#;

const CHECKOUT_TEMPLATE: &str = r#"<!doctype html><html><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Checkout &bull; {{ listing.title }}</title>
<style>
body{margin:0;background:#0b0c10;color:#e8e8f0;font:16px system-ui} .wrap{max-width:720px;margin:0 auto;padding:24px}
.box{background:#111317;border:1px solid #1c212b;border-radius:14px;padding:20px}
.row{display:flex;justify-content:space-between;margin:8px 0;color:#cbd2e1}
.row .v{font-weight:700;color:#fff}
.head{display:flex;align-items:center;gap:12px;margin-bottom:12px}
.img{width:56px;height:56px;border-radius:10px;background:#0f1218 center/cover no-repeat}
.muted{color:#9aa3b2}
.pay{margin-top:18px}
a.btn{display:inline-block;background:#6ee7b7;color:#000;text-decoration:none;font-weight:800;padding:12px 14px;border-radius:10px}
</style></head><body>
<div class="wrap">
  <div class="box">
    <div class="head">
      <div class="img" style="background-image:url('{{ listing.logo_url }}')"></div>
      <div><h2 style="margin:0">{{ listing.title }}</h2>
      <div class="muted">{{ listing.category }}{% if listing.equity_percent %} &bull; {{ listing.equity_percent }}% equity{% endif %}</div></div>
    </div>
    <div class="row"><div>Base price</div><div class="v">${{ listing.base_price }}</div></div>
    <div class="row"><div>Platform fee (5%)</div><div class="v">${{ listing.fee }}</div></div>
    <div class="row" style="border-top:1px solid #1c212b;padding-top:8px"><div>Total</div><div class="v">${{ listing.total }}</div></div>
    <div class="pay"><a class="btn" href="{{ listing.pay_url }}" target="_blank" rel="noopener">Pay ${{ listing.total }}</a></div>
    <p class="muted" style="margin-top:10px">You'll complete payment on the seller's checkout page (Gumroad/Stripe/LemonSqueezy).</p>
  </div>
  <p style="text-align:center;margin-top:14px"><a href="/">&larr; Back to listings</a></p>
</div></body></html>
"#;

const ADMIN_LIST_TEMPLATE: &str = r#"<!doctype html><html><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Admin &bull; {{ app_name }}</title>
<style>
body{font:14px system-ui;margin:20px} input,select,textarea{width:100%;padding:8px;margin:4px 0}
table{border-collapse:collapse;width:100%;margin-top:14px} td,th{border:1px solid #ccc;padding:8px}
.grid{display:grid;grid-template-columns:repeat(2,1fr);gap:12px}
</style></head><body>
<h2>{{ app_name }} &mdash; Admin</h2>
<form method="post" action="/admin/create?key={{ admin_key | urlencode_strict }}">
  <div class="grid">
    <div><label>Title<input name="title" required></label></div>
    <div><label>Category
      <select name="category" required>
        {%- for category in categories %}<option>{{ category }}</option>{% endfor %}
      </select></label></div>
    <div><label>Location<input name="location" placeholder="Remote/Global"></label></div>
    <div><label>Price USD<input name="price_usd" type="number" step="0.01" min="0" required></label></div>
    <div><label>Equity % (optional)<input name="equity_percent" type="number" step="0.01" min="0" max="100"></label></div>
    <div><label>Logo URL<input name="logo_url" placeholder="https://..."></label></div>
    <div style="grid-column:1/-1"><label>Description<textarea name="description" rows="4"></textarea></label></div>
    <div style="grid-column:1/-1"><label>Payment URL (Gumroad/Stripe/LemonSqueezy) <input name="pay_url" required placeholder="https://..."></label></div>
    <div><label>Status
      <select name="status">{% for status in statuses %}<option>{{ status }}</option>{% endfor %}</select></label></div>
  </div>
  <button type="submit">Create Listing</button>
</form>
<h3>All Listings</h3>
<table>
  <tr><th>Title</th><th>Category</th><th>Price</th><th>Equity</th><th>Status</th><th>Actions</th></tr>
{%- if rows %}
{%- for row in rows %}
  <tr>
    <td>{{ row.title }}</td><td>{{ row.category }}</td><td>${{ row.price }}</td>
    <td>{{ row.equity_percent }}</td><td>{{ row.status }}</td>
    <td>
      <a href="/checkout?id={{ row.id | urlencode_strict }}" target="_blank">View</a> |
      <a href="/admin/edit?id={{ row.id | urlencode_strict }}&key={{ admin_key | urlencode_strict }}">Edit</a> |
      <a href="/admin/delete?id={{ row.id | urlencode_strict }}&key={{ admin_key | urlencode_strict }}" onclick="return confirm('Delete listing?')">Delete</a>
    </td>
  </tr>
{%- endfor %}
{%- else %}
  <tr><td colspan="6">No listings yet</td></tr>
{%- endif %}
</table>
</body></html>
"#;

const ADMIN_EDIT_TEMPLATE: &str = r#"<!doctype html><html><body style="font:14px system-ui;margin:20px">
<h2>Edit Listing</h2>
<form method="post" action="/admin/update?key={{ admin_key | urlencode_strict }}">
  <input type="hidden" name="id" value="{{ listing.id }}"/>
  <label>Title <input name="title" value="{{ listing.title }}" required></label><br/>
  <label>Category
    <select name="category">
      {%- for category in categories %}<option{% if category == listing.category %} selected{% endif %}>{{ category }}</option>{% endfor %}
    </select>
  </label><br/>
  <label>Location <input name="location" value="{{ listing.location }}"></label><br/>
  <label>Price USD <input name="price_usd" type="number" step="0.01" value="{{ listing.price_usd }}" required></label><br/>
  <label>Equity % <input name="equity_percent" type="number" step="0.01" min="0" max="100" value="{{ listing.equity_percent }}"></label><br/>
  <label>Logo URL <input name="logo_url" value="{{ listing.logo_url }}"></label><br/>
  <label>Description <br/><textarea name="description" rows="5">{{ listing.description }}</textarea></label><br/>
  <label>Payment URL <input name="pay_url" value="{{ listing.pay_url }}" required></label><br/>
  <label>Status
    <select name="status">
      {%- for status in statuses %}<option{% if status == listing.status %} selected{% endif %}>{{ status }}</option>{% endfor %}
    </select>
  </label><br/><br/>
  <button type="submit">Save</button> &bull; <a href="/admin?key={{ admin_key | urlencode_strict }}">Cancel</a>
</form>
</body></html>
"#;

const TERMS_TEMPLATE: &str = r#"<!doctype html><html><body style="font:14px/1.5 system-ui;max-width:800px;margin:40px auto;padding:0 16px">
<h1>Terms of Use &mdash; {{ app_name }}</h1>
<p>This is a peer-to-peer marketplace for selling ideas, patents and equity/shares. {{ app_name }} provides listing, discovery and checkout redirection only. We do not own, review or guarantee any listing.</p>
<p><strong>Platform Fee:</strong> A 5% platform fee is shown at checkout.</p>
<p><strong>No Financial Advice:</strong> Listings may involve risk. Nothing on this site is investment, legal, accounting or tax advice.</p>
<p><strong>Third-Party Payments:</strong> Payments are completed on external processors (e.g., Stripe, Gumroad, LemonSqueezy). Refunds, chargebacks and disputes are handled by the processor and/or the seller.</p>
<p><strong>Seller Responsibility:</strong> Sellers are solely responsible for the accuracy and legality of their listings, including intellectual property and securities compliance in their jurisdiction.</p>
<p><strong>Jurisdiction:</strong> Operated from Jersey, Channel Islands. You agree that use of the service must comply with local laws where you and the seller reside. {{ app_name }} disclaims liability to the maximum extent permitted by law.</p>
<p><strong>Prohibited:</strong> illegal goods/services, unlicensed financial services, deceptive claims.</p>
<p>By using this service, you agree to these terms.</p>
<p><a href="/">Back</a></p>
</body></html>
"#;

const PRIVACY_TEMPLATE: &str = r#"<!doctype html><html><body style="font:14px/1.5 system-ui;max-width:800px;margin:40px auto;padding:0 16px">
<h1>Privacy Policy &mdash; {{ app_name }}</h1>
<p>We store listing data you submit and basic usage logs for security and debugging. We do not process card data; payments occur on third-party processors. Those processors have their own privacy policies.</p>
<p>You may request deletion of your listings by contacting support.</p>
<p>We may update this policy as the service evolves.</p>
<p><a href="/">Back</a></p>
</body></html>
"#;

#[cfg(test)]
mod tests {
    use super::PageRenderer;
    use crate::views;

    #[test]
    fn catalog_renders_empty_state() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.catalog("SmallBizX", &[]).unwrap();

        assert!(html.contains("No listings yet."));
        assert!(html.contains("<title>SmallBizX</title>"));
    }

    #[test]
    fn catalog_escapes_listing_content() {
        let renderer = PageRenderer::new().unwrap();
        let card = views::listing::Card {
            id: "abc".to_string(),
            title: "<script>alert(1)</script>".to_string(),
            category: "Other".to_string(),
            price: "1.00".to_string(),
            ..Default::default()
        };
        let html = renderer.catalog("SmallBizX", &[card]).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn admin_edit_marks_current_status_selected() {
        let renderer = PageRenderer::new().unwrap();
        let listing = views::listing::Form {
            id: "abc".to_string(),
            title: "AI Tool".to_string(),
            category: "Patent".to_string(),
            price_usd: "50.00".to_string(),
            status: "DRAFT".to_string(),
            ..Default::default()
        };
        let html = renderer.admin_edit("secret", &listing).unwrap();

        assert!(html.contains("<option selected>DRAFT</option>"));
        assert!(html.contains("<option selected>Patent</option>"));
        assert!(html.contains("/admin/update?key=secret"));
    }
}
