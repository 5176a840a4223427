//! The outbound lead record and its mapping to the CRM field schema.

use std::str::FromStr;

use serde::Serialize;

use medparts_core::products::Product;

use crate::error::ValidationError;

/// What the visitor is asking for; drives the `tipo_solicitud` CRM field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Cotizacion,
    Servicio,
    Garantia,
    Catalogo,
}

impl RequestType {
    /// Form option value, e.g. `"cotizacion"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            RequestType::Cotizacion => "cotizacion",
            RequestType::Servicio => "servicio",
            RequestType::Garantia => "garantia",
            RequestType::Catalogo => "catalogo",
        }
    }

    /// Human-readable label sent to the CRM.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RequestType::Cotizacion => "Cotización de refacciones",
            RequestType::Servicio => "Servicio técnico",
            RequestType::Garantia => "Consulta de garantía",
            RequestType::Catalogo => "Solicitar catálogo",
        }
    }
}

impl FromStr for RequestType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cotizacion" => Ok(RequestType::Cotizacion),
            "servicio" => Ok(RequestType::Servicio),
            "garantia" => Ok(RequestType::Garantia),
            "catalogo" => Ok(RequestType::Catalogo),
            other => Err(ValidationError::InvalidRequestType(other.to_string())),
        }
    }
}

/// Product metadata carried as hidden fields when the lead quotes a
/// specific catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductContext {
    pub code: String,
    pub name: String,
    pub category: String,
}

impl ProductContext {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        ProductContext {
            code: product.code.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
        }
    }
}

/// A validated lead, assembled from form fields. Transient: exists only for
/// the duration of one outbound request or deep-link construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub request_type: RequestType,
    pub equipment: Option<String>,
    pub message: String,
    pub product: Option<ProductContext>,
    /// Provenance tag identifying the originating form.
    pub source: String,
}

impl Lead {
    /// Splits the full name on the first space: first token becomes the
    /// first name, the remainder (possibly empty) the last name.
    #[must_use]
    pub fn split_name(&self) -> (&str, &str) {
        match self.name.split_once(' ') {
            Some((first, rest)) => (first, rest.trim()),
            None => (self.name.as_str(), ""),
        }
    }

    /// Maps the lead onto the fixed external CRM schema.
    #[must_use]
    pub fn to_submission(&self, page_uri: &str, page_name: &str) -> CrmSubmission {
        let (first_name, last_name) = self.split_name();
        let mut fields = vec![
            CrmField::new("firstname", first_name),
            CrmField::new("lastname", last_name),
            CrmField::new("email", &self.email),
            CrmField::new("phone", &self.phone),
            CrmField::new(
                "company",
                self.company.as_deref().unwrap_or("No especificada"),
            ),
            CrmField::new("tipo_solicitud", self.request_type.label()),
            CrmField::new(
                "equipo_marca_modelo",
                self.equipment.as_deref().unwrap_or("No especificado"),
            ),
            CrmField::new("fuente_lead", &self.source),
            CrmField::new("message", &self.message),
        ];
        if let Some(product) = &self.product {
            fields.push(CrmField::new("producto_codigo", &product.code));
            fields.push(CrmField::new("producto_nombre", &product.name));
            fields.push(CrmField::new("producto_categoria", &product.category));
        }
        CrmSubmission {
            fields,
            context: CrmContext {
                page_uri: page_uri.to_string(),
                page_name: page_name.to_string(),
            },
        }
    }
}

/// Wire shape posted to the CRM ingestion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CrmSubmission {
    pub fields: Vec<CrmField>,
    pub context: CrmContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrmField {
    pub name: String,
    pub value: String,
}

impl CrmField {
    fn new(name: &str, value: &str) -> Self {
        CrmField {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmContext {
    pub page_uri: String,
    pub page_name: String,
}
