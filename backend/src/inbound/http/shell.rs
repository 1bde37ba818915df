//! Server-rendered application shell.
//!
//! The shell is the HTML document the client application boots from. It is
//! assembled once in `create_server`: the root element's attributes come from
//! a [`ColorSchemeInitializer`] run and the body holds the [`LoadingScreen`]
//! until the client takes over.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::{ColorSchemeInitializer, RootAttributes};

/// Image shown by the loading screen.
pub const LOADING_IMAGE_SRC: &str = "/static/loading.svg";

/// Stateless, centered loading indicator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingScreen;

impl LoadingScreen {
    /// Fixed markup: a full-viewport flex container centring the image.
    pub fn render(self) -> String {
        format!(
            concat!(
                r#"<div class="loading-screen" role="status" aria-live="polite" "#,
                r#"style="position:fixed;inset:0;display:flex;"#,
                r#"align-items:center;justify-content:center">"#,
                r#"<img src="{src}" alt="Loading" width="96" height="96">"#,
                "</div>"
            ),
            src = LOADING_IMAGE_SRC
        )
    }
}

/// The rendered shell document.
#[derive(Debug, Clone)]
pub struct AppShell {
    root: RootAttributes,
    document: String,
}

impl AppShell {
    /// Run `initializer` against a fresh root and render the document.
    ///
    /// An initializer that has already run leaves the root without a scheme;
    /// the client falls back to its own default in that case.
    ///
    /// # Examples
    /// ```
    /// use coursehub::domain::{ColorScheme, ColorSchemeInitializer};
    /// use coursehub::inbound::http::shell::AppShell;
    ///
    /// let shell = AppShell::assemble(&ColorSchemeInitializer::new(ColorScheme::Dark));
    /// assert!(shell.document().contains(r#"<html data-theme="dark">"#));
    /// ```
    pub fn assemble(initializer: &ColorSchemeInitializer) -> Self {
        let mut root = RootAttributes::new();
        if !initializer.initialize(&mut root) {
            debug!("color scheme already initialised; shell root left untouched");
        }
        let document = render_document(&root, LoadingScreen);
        Self { root, document }
    }

    /// Attributes rendered on the `<html>` element.
    pub fn root(&self) -> &RootAttributes {
        &self.root
    }

    /// Complete HTML document.
    pub fn document(&self) -> &str {
        &self.document
    }
}

fn render_document(root: &RootAttributes, loading: LoadingScreen) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html");
    for (name, value) in root.iter() {
        html.push_str(&format!(r#" {name}="{}""#, escape_attribute(value)));
    }
    html.push_str(concat!(
        ">\n<head>\n",
        r#"<meta charset="utf-8">"#,
        "\n",
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
        "\n<title>CourseHub</title>\n</head>\n<body>\n",
        r#"<div id="app">"#,
    ));
    html.push_str(&loading.render());
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Serve the application shell.
#[utoipa::path(
    get,
    path = "/",
    tags = ["shell"],
    responses(
        (status = 200, description = "HTML application shell", body = String, content_type = "text/html")
    )
)]
#[get("/")]
pub async fn app_shell(shell: web::Data<AppShell>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .body(shell.document().to_owned())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use super::*;
    use crate::domain::{COLOR_SCHEME_ATTRIBUTE, ColorScheme, DocumentRoot};

    #[rstest]
    #[case(ColorScheme::Light, r#"<html data-theme="light">"#)]
    #[case(ColorScheme::Dark, r#"<html data-theme="dark">"#)]
    fn shell_root_carries_default_scheme(#[case] scheme: ColorScheme, #[case] tag: &str) {
        let shell = AppShell::assemble(&ColorSchemeInitializer::new(scheme));

        assert!(shell.document().contains(tag));
        assert_eq!(shell.root().len(), 1);
        assert_eq!(
            shell.root().attribute(COLOR_SCHEME_ATTRIBUTE),
            Some(scheme.as_str())
        );
    }

    #[rstest]
    fn reused_initializer_leaves_root_bare() {
        let initializer = ColorSchemeInitializer::new(ColorScheme::Dark);
        let _first = AppShell::assemble(&initializer);

        let second = AppShell::assemble(&initializer);

        assert!(second.root().is_empty());
        assert!(second.document().contains("<html>"));
    }

    #[rstest]
    fn loading_screen_is_centred_image() {
        let markup = LoadingScreen.render();

        assert!(markup.contains("align-items:center;justify-content:center"));
        assert!(markup.contains(&format!(r#"src="{LOADING_IMAGE_SRC}""#)));
        assert_eq!(markup, LoadingScreen.render());
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case(r#"a"b<c>&d"#, "a&quot;b&lt;c&gt;&amp;d")]
    fn attribute_values_are_escaped(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_attribute(raw), expected);
    }

    #[actix_web::test]
    async fn shell_is_served_as_html() {
        let shell = AppShell::assemble(&ColorSchemeInitializer::new(ColorScheme::Light));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(shell))
                .service(app_shell),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));

        let body = actix_test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("utf8");
        assert!(body.contains(r#"data-theme="light""#));
        assert!(body.contains("loading-screen"));
    }
}
