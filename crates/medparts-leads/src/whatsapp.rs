//! WhatsApp quote path: composes a prefilled message and builds the deep
//! link. This path never touches the CRM, so it bypasses the validation and
//! challenge pipeline entirely.

use reqwest::Url;

use medparts_core::products::Product;

use crate::error::LeadError;

/// Specifications and compatibility entries included in the composed message.
const MESSAGE_SPEC_LIMIT: usize = 3;

/// Contact details carried into the composed message.
#[derive(Debug, Clone)]
pub struct QuoteContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub hospital: Option<String>,
}

/// Composes the human-readable quote request, optionally embedding a
/// product block (name, code, brand, category, availability, top
/// specifications, top compatibility entries).
#[must_use]
pub fn compose_quote_message(contact: &QuoteContact, product: Option<&Product>) -> String {
    let mut message = String::from("*SOLICITUD DE COTIZACIÓN - REFACCIONES MÉDICAS*\n\n");
    message.push_str(&format!("*Cliente:* {}\n", contact.name));
    message.push_str(&format!("*Teléfono:* {}\n", contact.phone));
    message.push_str(&format!("*Email:* {}\n", contact.email));
    if let Some(hospital) = &contact.hospital {
        message.push_str(&format!("*Hospital/Clínica:* {hospital}\n"));
    }

    if let Some(product) = product {
        message.push_str("\n*REFACCIÓN SOLICITADA:*\n");
        message.push_str(&format!("*Nombre:* {}\n", product.name));
        message.push_str(&format!("*Código:* {}\n", product.code));
        message.push_str(&format!("*Marca:* {}\n", product.brand));
        message.push_str(&format!("*Categoría:* {}\n", product.category));
        let availability = if product.stock.available {
            "En stock"
        } else {
            "Consultar disponibilidad"
        };
        message.push_str(&format!("*Disponibilidad:* {availability}\n"));

        if !product.specifications.is_empty() {
            message.push_str("*Especificaciones:*\n");
            for (label, value) in product.specifications.iter().take(MESSAGE_SPEC_LIMIT) {
                message.push_str(&format!("- {label}: {value}\n"));
            }
        }
        if !product.compatibility.is_empty() {
            message.push_str("*Compatibilidad:*\n");
            for item in product.compatibility.iter().take(MESSAGE_SPEC_LIMIT) {
                message.push_str(&format!("- {item}\n"));
            }
        }
    }

    message.push_str("\nSolicito cotización y tiempo de entrega.\n");
    message.push_str("\n*Solicitud enviada desde: Catálogo de Refacciones*");
    message
}

/// Builds the messaging deep link: `https://wa.me/<recipient>?text=<encoded>`.
/// The message is percent-encoded through the URL's query serializer.
///
/// # Errors
///
/// Returns [`LeadError::DeepLink`] if the recipient does not form a valid URL
/// path segment.
pub fn quote_deep_link(recipient: &str, message: &str) -> Result<Url, LeadError> {
    let mut url = Url::parse(&format!("https://wa.me/{recipient}"))
        .map_err(|e| LeadError::DeepLink(e.to_string()))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use medparts_core::products::{SpecList, Stock};

    use super::*;

    fn make_contact() -> QuoteContact {
        QuoteContact {
            name: "Juan Pérez".to_string(),
            phone: "55 1234 5678".to_string(),
            email: "juan@hospital.mx".to_string(),
            hospital: Some("Hospital General".to_string()),
        }
    }

    fn make_product() -> Product {
        Product {
            id: 1,
            code: "VAL-001".to_string(),
            name: "Válvula de Alivio de Presión".to_string(),
            short_description: String::new(),
            full_description: None,
            category: "anestesia".to_string(),
            brand: "drager".to_string(),
            icon: None,
            specifications: SpecList(vec![
                ("Presión".to_string(), "0-70 cmH2O".to_string()),
                ("Material".to_string(), "Latón médico".to_string()),
                ("Compatibilidad".to_string(), "Universal".to_string()),
                ("Peso".to_string(), "120 g".to_string()),
            ]),
            stock: Stock {
                available: true,
                quantity: None,
                lead_time: None,
            },
            price: None,
            sale_price: None,
            tags: vec![],
            compatibility: vec![
                "Dräger Fabius".to_string(),
                "Dräger Primus".to_string(),
                "Dräger Atlan".to_string(),
                "Dräger Zeus".to_string(),
            ],
            images: None,
            featured: false,
            new_product: false,
            on_sale: false,
        }
    }

    #[test]
    fn message_includes_contact_and_boilerplate() {
        let message = compose_quote_message(&make_contact(), None);
        assert!(message.contains("*Cliente:* Juan Pérez"));
        assert!(message.contains("*Hospital/Clínica:* Hospital General"));
        assert!(message.contains("Solicito cotización"));
        assert!(message.contains("Catálogo de Refacciones"));
        assert!(!message.contains("REFACCIÓN SOLICITADA"));
    }

    #[test]
    fn message_omits_hospital_when_absent() {
        let mut contact = make_contact();
        contact.hospital = None;
        let message = compose_quote_message(&contact, None);
        assert!(!message.contains("Hospital/Clínica"));
    }

    #[test]
    fn product_block_truncates_specs_and_compatibility() {
        let message = compose_quote_message(&make_contact(), Some(&make_product()));
        assert!(message.contains("*Código:* VAL-001"));
        assert!(message.contains("*Disponibilidad:* En stock"));
        assert!(message.contains("- Presión: 0-70 cmH2O"));
        assert!(message.contains("- Compatibilidad: Universal"));
        assert!(!message.contains("- Peso"), "only first three specs");
        assert!(message.contains("- Dräger Atlan"));
        assert!(!message.contains("- Dräger Zeus"), "only first three entries");
    }

    #[test]
    fn unavailable_product_says_consult() {
        let mut product = make_product();
        product.stock.available = false;
        let message = compose_quote_message(&make_contact(), Some(&product));
        assert!(message.contains("*Disponibilidad:* Consultar disponibilidad"));
    }

    #[test]
    fn deep_link_targets_recipient_with_encoded_text() {
        let url = quote_deep_link("5214381092435", "Hola, cotización VAL-001")
            .expect("valid deep link");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5214381092435");
        let query = url.query().expect("query string present");
        assert!(query.starts_with("text="));
        assert!(!query.contains(' '), "spaces must be encoded");

        // The encoded text round-trips.
        let (_, decoded) = url.query_pairs().next().expect("one query pair");
        assert_eq!(decoded, "Hola, cotización VAL-001");
    }
}
