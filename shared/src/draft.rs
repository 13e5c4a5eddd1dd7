//! Borradores de formulario y su validación.
//!
//! Cada recurso implementa [`ResourceForm`]: reglas de validación ordenadas
//! (el primer fallo gana y se muestra un único mensaje), conversión al
//! cuerpo REST y síntesis de un registro local para cuando el servidor
//! responde con cuerpo vacío.

use serde::Serialize;

use crate::models::{FutbolTeam, Shirt, ShirtPayload, TeamPayload};

/// Error de validación local. Nunca llega a la red.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Contrato común de los formularios de recurso.
pub trait ResourceForm {
    type Payload: Serialize;
    type Record;

    /// Evalúa las reglas en orden y devuelve el primer fallo: primero los
    /// campos requeridos en orden de declaración, luego formato y longitud,
    /// por último los rangos numéricos.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Cuerpo REST del borrador. Solo tiene sentido tras validar.
    fn to_payload(&self) -> Self::Payload;

    /// Registro local para una respuesta sin cuerpo: en edición se funde el
    /// borrador sobre el original, en creación se usa `fallback_id`.
    fn merge_fallback(&self, original: Option<&Self::Record>, fallback_id: i64) -> Self::Record;
}

/// Copia de trabajo de un formulario abierto: los campos editables, el
/// único error activo y el candado de envío.
///
/// Se crea al abrir el formulario y se descarta al cancelar o al guardar.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<F> {
    pub fields: F,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl<F> Draft<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            error: None,
            in_flight: false,
        }
    }

    /// Candado de envío: devuelve `false` si ya hay un envío en curso.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Libera el candado. Se llama siempre: éxito, fallo de validación y
    /// fallo de red.
    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }
}

/// Letras (incluidas las acentuadas), espacios, apóstrofes y guiones.
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == ' ' || c == '\'' || c == '-'
}

/// Igual que [`is_name_char`] pero admitiendo dígitos.
fn is_alnum_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '\'' || c == '-'
}

// =========================================================
// Equipos de fútbol
// =========================================================

/// Campos del formulario de equipo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamFields {
    pub name: String,
    pub country: String,
}

impl TeamFields {
    pub fn from_record(team: &FutbolTeam) -> Self {
        Self {
            name: team.name.clone(),
            country: team.country.clone(),
        }
    }
}

impl ResourceForm for TeamFields {
    type Payload = TeamPayload;
    type Record = FutbolTeam;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new(
                "name",
                "El nombre del equipo es requerido",
            ));
        }
        if self.country.trim().is_empty() {
            return Err(ValidationError::new(
                "country",
                "El país del equipo es requerido",
            ));
        }
        if !self.name.chars().all(is_name_char) {
            return Err(ValidationError::new(
                "name",
                "El nombre solo puede contener letras, espacios, apostrofes y guiones",
            ));
        }
        if !self.country.chars().all(is_name_char) {
            return Err(ValidationError::new(
                "country",
                "El país solo puede contener letras, espacios, apostrofes y guiones",
            ));
        }
        Ok(())
    }

    fn to_payload(&self) -> TeamPayload {
        TeamPayload {
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }

    fn merge_fallback(&self, original: Option<&FutbolTeam>, fallback_id: i64) -> FutbolTeam {
        FutbolTeam {
            id: original.map_or(fallback_id, |team| team.id),
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
        }
    }
}

// =========================================================
// Camisetas
// =========================================================

/// Campos del formulario de camiseta.
///
/// Los campos numéricos se guardan como texto (son entradas de formulario)
/// y se interpretan al validar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShirtFields {
    pub team_id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub discount: String,
    pub size: String,
}

impl ShirtFields {
    pub fn from_record(shirt: &Shirt) -> Self {
        Self {
            team_id: shirt.team_id.to_string(),
            name: shirt.name.clone(),
            description: shirt.description.clone(),
            image: shirt.image.clone(),
            price: shirt.price.to_string(),
            discount: shirt.discount.to_string(),
            size: shirt.size.clone(),
        }
    }

    fn parsed_team_id(&self) -> Option<i64> {
        self.team_id.trim().parse().ok()
    }

    pub fn parsed_price(&self) -> Option<f64> {
        self.price.trim().parse().ok()
    }

    /// Un descuento ilegible se normaliza a 0, igual que un campo vacío.
    pub fn parsed_discount(&self) -> i32 {
        self.discount.trim().parse().unwrap_or(0)
    }
}

impl ResourceForm for ShirtFields {
    type Payload = ShirtPayload;
    type Record = Shirt;

    fn validate(&self) -> Result<(), ValidationError> {
        // Requeridos, en orden de declaración.
        if self.parsed_team_id().is_none() {
            return Err(ValidationError::new("team_id", "El equipo es requerido"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "El nombre es requerido"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::new(
                "description",
                "La descripción es requerida",
            ));
        }
        if self.image.trim().is_empty() {
            return Err(ValidationError::new(
                "image",
                "La URL de la imagen es requerida",
            ));
        }
        if self.size.trim().is_empty() {
            return Err(ValidationError::new("size", "La talla es requerida"));
        }

        // Formato y longitud.
        if !self.name.chars().all(is_alnum_name_char) {
            return Err(ValidationError::new(
                "name",
                "El nombre solo puede contener letras, números, espacios, apostrofes y guiones",
            ));
        }
        if self.description.chars().count() > 500 {
            return Err(ValidationError::new(
                "description",
                "La descripción no puede exceder 500 caracteres",
            ));
        }
        if self.size.trim().chars().count() > 5 {
            return Err(ValidationError::new(
                "size",
                "La talla no puede exceder 5 caracteres",
            ));
        }

        // Rangos numéricos.
        if !self.parsed_price().is_some_and(|price| price > 0.0) {
            return Err(ValidationError::new(
                "price",
                "El precio debe ser mayor a 0",
            ));
        }
        let discount = self.parsed_discount();
        if !(0..=100).contains(&discount) {
            return Err(ValidationError::new(
                "discount",
                "El descuento debe estar entre 0 y 100",
            ));
        }
        Ok(())
    }

    fn to_payload(&self) -> ShirtPayload {
        ShirtPayload {
            team_id: self.parsed_team_id().unwrap_or_default(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            price: self.parsed_price().unwrap_or_default(),
            discount: self.parsed_discount(),
            size: self.size.trim().to_string(),
        }
    }

    fn merge_fallback(&self, original: Option<&Shirt>, fallback_id: i64) -> Shirt {
        Shirt {
            id: original.map_or(fallback_id, |shirt| shirt.id),
            team_id: self.parsed_team_id().unwrap_or_default(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            price: self.parsed_price().unwrap_or_default(),
            discount: self.parsed_discount(),
            size: self.size.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_team() -> TeamFields {
        TeamFields {
            name: "Real Madrid".to_string(),
            country: "España".to_string(),
        }
    }

    fn valid_shirt() -> ShirtFields {
        ShirtFields {
            team_id: "3".to_string(),
            name: "Camiseta Visita 2025".to_string(),
            description: "Tela transpirable".to_string(),
            image: "https://ejemplo.com/camiseta.jpg".to_string(),
            price: "50".to_string(),
            discount: "10".to_string(),
            size: "XL".to_string(),
        }
    }

    // ----- candado de envío -----

    #[test]
    fn begin_submit_blocks_reentry_until_finished() {
        let mut draft = Draft::new(valid_team());
        assert!(draft.begin_submit());
        assert!(!draft.begin_submit());
        draft.finish_submit();
        assert!(draft.begin_submit());
    }

    // ----- equipos -----

    #[test]
    fn team_names_with_accents_apostrophes_and_hyphens_are_valid() {
        for (name, country) in [
            ("Real Madrid", "España"),
            ("Atlético-Madrid", "España"),
            ("Newell's Old Boys", "Argentina"),
            ("Bayern Múnich", "Alemania"),
        ] {
            let fields = TeamFields {
                name: name.to_string(),
                country: country.to_string(),
            };
            assert!(fields.validate().is_ok(), "{name} debería ser válido");
        }
    }

    #[test]
    fn team_required_checks_run_before_charset_checks() {
        let fields = TeamFields {
            name: String::new(),
            country: "123".to_string(),
        };
        let err = fields.validate().unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "El nombre del equipo es requerido");
    }

    #[test]
    fn team_name_with_digits_is_rejected() {
        let fields = TeamFields {
            name: "Real Madrid 2".to_string(),
            country: "España".to_string(),
        };
        let err = fields.validate().unwrap_err();
        assert_eq!(err.field, "name");
        assert!(err.message.contains("letras"));
    }

    #[test]
    fn team_country_charset_is_checked() {
        let fields = TeamFields {
            name: "Boca Juniors".to_string(),
            country: "Argentina!".to_string(),
        };
        assert_eq!(fields.validate().unwrap_err().field, "country");
    }

    #[test]
    fn team_merge_fallback_keeps_original_id_on_edit() {
        let original = FutbolTeam {
            id: 42,
            name: "Viejo".to_string(),
            country: "Chile".to_string(),
        };
        let merged = valid_team().merge_fallback(Some(&original), 999);
        assert_eq!(merged.id, 42);
        assert_eq!(merged.name, "Real Madrid");
    }

    #[test]
    fn team_merge_fallback_uses_fallback_id_on_create() {
        let merged = valid_team().merge_fallback(None, 1_700_000_000_000);
        assert_eq!(merged.id, 1_700_000_000_000);
    }

    // ----- camisetas -----

    #[test]
    fn valid_shirt_passes() {
        assert!(valid_shirt().validate().is_ok());
    }

    #[test]
    fn empty_shirt_fails_on_team_first() {
        let err = ShirtFields::default().validate().unwrap_err();
        assert_eq!(err.field, "team_id");
        assert_eq!(err.message, "El equipo es requerido");
    }

    #[test]
    fn shirt_discount_out_of_range_is_rejected() {
        for discount in ["150", "-5", "101"] {
            let mut fields = valid_shirt();
            fields.discount = discount.to_string();
            let err = fields.validate().unwrap_err();
            assert_eq!(err.field, "discount");
            assert!(err.message.contains("0 y 100"), "descuento {discount}");
        }
    }

    #[test]
    fn unparseable_discount_defaults_to_zero() {
        let mut fields = valid_shirt();
        fields.discount = "abc".to_string();
        assert!(fields.validate().is_ok());
        assert_eq!(fields.to_payload().discount, 0);
    }

    #[test]
    fn shirt_price_must_parse_and_be_positive() {
        for price in ["", "0", "-10", "gratis"] {
            let mut fields = valid_shirt();
            fields.price = price.to_string();
            let err = fields.validate().unwrap_err();
            assert_eq!(err.field, "price", "precio {price:?}");
        }
    }

    #[test]
    fn shirt_description_over_500_chars_is_rejected() {
        let mut fields = valid_shirt();
        fields.description = "x".repeat(501);
        assert_eq!(fields.validate().unwrap_err().field, "description");
    }

    #[test]
    fn shirt_size_over_5_chars_is_rejected() {
        let mut fields = valid_shirt();
        fields.size = "XXXXXL".to_string();
        assert_eq!(fields.validate().unwrap_err().field, "size");
    }

    #[test]
    fn shirt_payload_parses_numeric_fields() {
        let payload = valid_shirt().to_payload();
        assert_eq!(payload.team_id, 3);
        assert!((payload.price - 50.0).abs() < 1e-9);
        assert_eq!(payload.discount, 10);
    }

    #[test]
    fn shirt_merge_fallback_merges_over_original() {
        let original = Shirt {
            id: 8,
            team_id: 1,
            name: "Antigua".to_string(),
            description: "Vieja descripción".to_string(),
            image: "https://ejemplo.com/vieja.jpg".to_string(),
            price: 30.0,
            discount: 0,
            size: "S".to_string(),
        };
        let merged = valid_shirt().merge_fallback(Some(&original), 999);
        assert_eq!(merged.id, 8);
        assert_eq!(merged.team_id, 3);
        assert_eq!(merged.size, "XL");
    }
}
