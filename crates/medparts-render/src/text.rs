//! Plain-text mount adapter for the view-model, used by the CLI driver.

use std::fmt::Write as _;

use crate::view::{
    Badge, CatalogStats, GridView, ImageRef, PriceView, ProductCard, ProductDetail, StockView,
};
use crate::Span;

fn spans_to_string(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.highlighted {
            let _ = write!(out, "[{}]", span.text);
        } else {
            out.push_str(&span.text);
        }
    }
    out
}

fn badges_line(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| b.label())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn price_line(price: &PriceView) -> Option<String> {
    match price {
        PriceView::Hidden => None,
        PriceView::QuoteOnRequest => Some("Precio: Cotizar".to_string()),
        PriceView::Listed { amount, currency } => Some(format!("Precio: {currency} ${amount:.2}")),
        PriceView::Discounted {
            original,
            sale,
            currency,
        } => Some(format!(
            "Precio: {currency} ${sale:.2} (antes ${original:.2})"
        )),
    }
}

#[must_use]
pub fn render_card(card: &ProductCard) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} — {}",
        spans_to_string(&card.code),
        spans_to_string(&card.name)
    );
    let _ = writeln!(out, "  {}", badges_line(&card.badges));
    if !card.description.is_empty() {
        let _ = writeln!(out, "  {}", card.description);
    }
    if let Some(price) = price_line(&card.price) {
        let _ = writeln!(out, "  {price}");
    }
    for (label, value) in &card.specifications {
        let _ = writeln!(out, "  {label}: {value}");
    }
    out
}

#[must_use]
pub fn render_grid(grid: &GridView) -> String {
    match grid {
        GridView::NoResults => {
            "No se encontraron productos.\nIntenta ajustar los filtros de búsqueda.\n".to_string()
        }
        GridView::Products(cards) => {
            let mut out = String::new();
            for card in cards {
                out.push_str(&render_card(card));
                out.push('\n');
            }
            out
        }
    }
}

#[must_use]
pub fn render_detail(detail: &ProductDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} — {}", detail.code, detail.name);
    if !detail.badges.is_empty() {
        let _ = writeln!(out, "{}", badges_line(&detail.badges));
    }
    let _ = writeln!(out, "Marca: {}", detail.brand);
    let _ = writeln!(out, "Categoría: {}", detail.category);
    match &detail.image {
        ImageRef::Url(url) => {
            let _ = writeln!(out, "Imagen: {url}");
        }
        ImageRef::Icon(icon) => {
            let _ = writeln!(out, "Imagen: ({icon})");
        }
    }
    if !detail.description.is_empty() {
        let _ = writeln!(out, "\n{}", detail.description);
    }
    if let Some(price) = price_line(&detail.price) {
        let _ = writeln!(out, "\n{price}");
    }
    match &detail.stock {
        StockView::Available { quantity: Some(n) } => {
            let _ = writeln!(out, "Disponibilidad: En Stock ({n})");
        }
        StockView::Available { quantity: None } => {
            let _ = writeln!(out, "Disponibilidad: En Stock");
        }
        StockView::Unavailable => {
            let _ = writeln!(out, "Disponibilidad: Consultar");
        }
    }
    if let Some(lead_time) = &detail.lead_time {
        let _ = writeln!(out, "Tiempo de entrega: {lead_time}");
    }
    if !detail.specifications.is_empty() {
        let _ = writeln!(out, "\nEspecificaciones técnicas:");
        for (label, value) in &detail.specifications {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }
    if !detail.compatibility.is_empty() {
        let _ = writeln!(out, "\nCompatibilidad:");
        for item in &detail.compatibility {
            let _ = writeln!(out, "  - {item}");
        }
    }
    if !detail.tags.is_empty() {
        let _ = writeln!(out, "\nEtiquetas: {}", detail.tags.join(", "));
    }
    out
}

#[must_use]
pub fn render_stats(stats: &CatalogStats) -> String {
    format!(
        "{} productos, {} disponibles, {} marcas\n",
        stats.total, stats.available, stats.distinct_brands
    )
}
