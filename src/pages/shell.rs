//! HTML document shells.

use axum::response::Html;

use crate::components::feedback::{ToastProps, toast};
use crate::markup::{Document, Markup, el, icon};
use crate::security::RequestContext;

/// Icon font used by every component.
pub const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Component stylesheet served from the assets directory.
pub const COMPONENT_CSS: &str = "/assets/css/nexus-components.css";

const OFFLINE_SCRIPT: &str = r"
(function () {
    const banner = document.getElementById('offlineBanner');
    if (!banner) { return; }
    function handleOffline() {
        banner.classList.add('visible');
        if (navigator.vibrate) { navigator.vibrate(100); }
    }
    function handleOnline() { banner.classList.remove('visible'); }
    window.addEventListener('online', handleOnline);
    window.addEventListener('offline', handleOffline);
    if (!navigator.onLine) { handleOffline(); }
})();";

/// A full page: head assets, body markup and trailing scripts.
#[derive(Debug, Clone)]
pub struct PageShell {
    title: String,
    body_class: String,
    stylesheets: Vec<String>,
    styles: Vec<&'static str>,
    scripts: Vec<&'static str>,
}

impl PageShell {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_class: String::new(),
            stylesheets: vec![FONT_AWESOME.to_string(), COMPONENT_CSS.to_string()],
            styles: Vec::new(),
            scripts: Vec::new(),
        }
    }

    #[must_use]
    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = class.into();
        self
    }

    #[must_use]
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    /// Inline `<style>` block in the head.
    #[must_use]
    pub fn style(mut self, css: &'static str) -> Self {
        self.styles.push(css);
        self
    }

    /// Inline `<script>` appended to the end of the body.
    #[must_use]
    pub fn script(mut self, js: &'static str) -> Self {
        self.scripts.push(js);
        self
    }

    #[must_use]
    pub fn render(self, body: impl Into<Markup>) -> String {
        let head = el("head")
            .child(el("meta").attr("charset", "utf-8"))
            .child(
                el("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(el("title").text(format!("{} | Project NEXUS", self.title)))
            .children(
                self.stylesheets
                    .iter()
                    .map(|href| el("link").attr("rel", "stylesheet").attr("href", href)),
            )
            .children(self.styles.iter().map(|css| el("style").raw(*css)));

        let body = el("body")
            .class(self.body_class)
            .child(body)
            .children(self.scripts.iter().map(|js| el("script").raw(*js)));

        Document::new(el("html").attr("lang", "en").child(head).child(body)).render()
    }

    #[must_use]
    pub fn into_html(self, body: impl Into<Markup>) -> Html<String> {
        Html(self.render(body))
    }
}

fn offline_banner() -> Markup {
    el("div")
        .class("offline-banner")
        .attr("id", "offlineBanner")
        .attr("role", "alert")
        .attr("aria-live", "polite")
        .child(icon("wifi"))
        .child(el("span").text("No internet connection"))
        .into()
}

fn site_header(ctx: &RequestContext) -> Markup {
    let account = if ctx.is_signed_in() {
        el("a")
            .class("site-nav__link")
            .attr("href", ctx.url("/volunteering/dashboard"))
            .child(icon("gauge"))
            .child(el("span").text("Dashboard"))
    } else {
        el("a")
            .class("site-nav__link")
            .attr("href", ctx.url("/login"))
            .child(icon("right-to-bracket"))
            .child(el("span").text("Sign in"))
    };

    el("header")
        .class("site-header")
        .child(
            el("a")
                .class("site-header__brand")
                .attr("href", ctx.url("/"))
                .text("Project NEXUS"),
        )
        .child(
            el("nav")
                .class("site-nav")
                .attr("aria-label", "Main")
                .child(
                    el("a")
                        .class("site-nav__link")
                        .attr("href", ctx.url("/volunteering"))
                        .child(icon("hand-holding-heart"))
                        .child(el("span").text("Volunteering")),
                )
                .child(account),
        )
        .into()
}

/// Tenant page: site header, offline banner, toast host and the page body.
pub fn app_page(ctx: &RequestContext, title: &str, main: impl Into<Markup>) -> Html<String> {
    let body = Markup::Fragment(vec![
        offline_banner(),
        site_header(ctx),
        el("main").class("site-main").attr("id", "main").child(main).into(),
        toast(&ToastProps::default()),
    ]);

    PageShell::new(title)
        .body_class("nexus-app")
        .script(OFFLINE_SCRIPT)
        .into_html(body)
}
