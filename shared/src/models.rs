//! Modelos de dominio y cuerpos de las peticiones REST.

use serde::{Deserialize, Serialize};

/// Usuario autenticado, tal como lo devuelve el backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Equipo de fútbol registrado en la tienda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutbolTeam {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Camiseta del catálogo.
///
/// El backend puede omitir `discount`; serde lo normaliza a 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shirt {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub discount: i32,
    pub size: String,
}

impl Shirt {
    /// Precio final con el descuento aplicado.
    ///
    /// Valor derivado: se calcula al leer, nunca se persiste.
    pub fn final_price(&self) -> f64 {
        self.price * (1.0 - f64::from(self.discount) / 100.0)
    }
}

/// Cuerpo de POST/PUT `/futbol_teams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPayload {
    pub name: String,
    pub country: String,
}

/// Cuerpo de POST/PUT `/shirts`. Conjunto de campos fijo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShirtPayload {
    pub team_id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub discount: i32,
    pub size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shirt(price: f64, discount: i32) -> Shirt {
        Shirt {
            id: 1,
            team_id: 7,
            name: "Camiseta Local 2025".to_string(),
            description: "Edición aniversario".to_string(),
            image: "https://ejemplo.com/camiseta.jpg".to_string(),
            price,
            discount,
            size: "M".to_string(),
        }
    }

    #[test]
    fn final_price_applies_discount() {
        let shirt = sample_shirt(100.0, 20);
        assert!((shirt.final_price() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn final_price_without_discount_is_the_price() {
        let shirt = sample_shirt(59.99, 0);
        assert!((shirt.final_price() - 59.99).abs() < 1e-9);
    }

    #[test]
    fn missing_discount_deserializes_as_zero() {
        let json = r#"{
            "id": 3,
            "team_id": 1,
            "name": "Camiseta Visita",
            "description": "Segunda equipación",
            "image": "https://ejemplo.com/visita.jpg",
            "price": 45.5,
            "size": "L"
        }"#;
        let shirt: Shirt = serde_json::from_str(json).unwrap();
        assert_eq!(shirt.discount, 0);
    }
}
