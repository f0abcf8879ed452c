//! HTML rendering. Templates are compiled into the binary and autoescaped.

use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::forms::{CafeForm, FormField, ValidationFailure};
use crate::models::{CafeRecord, RatingScale};

const BASE: &str = include_str!("../templates/base.html");
const INDEX: &str = include_str!("../templates/index.html");
const ADD: &str = include_str!("../templates/add.html");
const CAFES: &str = include_str!("../templates/cafes.html");
const ERROR: &str = include_str!("../templates/error.html");

#[derive(Debug, Serialize)]
struct TextField {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct SelectField {
    name: &'static str,
    label: &'static str,
    choices: &'static [&'static str],
    selected: String,
    error: Option<String>,
}

/// State of the add form being rendered
#[derive(Debug, Default)]
pub struct AddFormView<'a> {
    pub values: Option<&'a CafeForm>,
    pub failure: Option<&'a ValidationFailure>,
    pub form_error: Option<&'a str>,
}

/// Shared, immutable template set
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("index.html", INDEX),
            ("add.html", ADD),
            ("cafes.html", CAFES),
        ])?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn home(&self) -> Result<String, tera::Error> {
        self.tera.render("index.html", &Context::new())
    }

    pub fn add_form(&self, view: &AddFormView<'_>, csrf_token: &str) -> Result<String, tera::Error> {
        let empty = CafeForm::default();
        let values = view.values.unwrap_or(&empty);
        let error_for = |field: FormField| {
            view.failure
                .and_then(|f| f.errors.iter().find(|e| e.field == field))
                .map(|e| e.message())
        };

        let text = |field: FormField, input_type: &'static str, value: &str| TextField {
            name: field.name(),
            label: field.label(),
            input_type,
            value: value.to_string(),
            error: error_for(field),
        };
        let text_fields = vec![
            text(FormField::Cafe, "text", &values.cafe),
            text(FormField::Location, "url", &values.location),
            text(FormField::OpenTime, "text", &values.open_time),
            text(FormField::CloseTime, "text", &values.close_time),
        ];

        let select = |field: FormField, scale: RatingScale, value: &str| SelectField {
            name: field.name(),
            label: field.label(),
            choices: scale.choices,
            selected: value.to_string(),
            error: error_for(field),
        };
        let select_fields = vec![
            select(FormField::CoffeeRating, RatingScale::COFFEE, &values.coffee_rating),
            select(FormField::WifiRating, RatingScale::WIFI, &values.wifi_rating),
            select(FormField::PowerRating, RatingScale::POWER, &values.power_rating),
        ];

        let mut ctx = Context::new();
        ctx.insert("text_fields", &text_fields);
        ctx.insert("select_fields", &select_fields);
        ctx.insert("csrf_token", csrf_token);
        ctx.insert("form_error", &view.form_error);

        self.tera.render("add.html", &ctx)
    }

    pub fn cafes(&self, cafes: &[CafeRecord], error: Option<&str>) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("cafes", cafes);
        ctx.insert("error", &error);

        self.tera.render("cafes.html", &ctx)
    }
}

/// Standalone failure page; falls back to plain text if rendering fails
pub fn error_page(status: StatusCode, message: &str) -> String {
    let mut ctx = Context::new();
    ctx.insert("status", &status.to_string());
    ctx.insert("message", message);

    Tera::one_off(ERROR, &ctx, true).unwrap_or_else(|e| {
        tracing::error!("Failed to render error page: {:?}", e);
        format!("{}: {}", status, message)
    })
}
