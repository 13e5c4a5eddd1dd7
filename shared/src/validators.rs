//! Validadores de las pantallas de acceso y registro.

/// Comprobación de forma básica del email: `algo@dominio.tld`.
///
/// El login usa una versión aún más laxa; esta se aplica en el registro.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(' ') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Reglas mínimas de contraseña para crear una cuenta.
///
/// El login no valida complejidad: las credenciales las juzga el servidor.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 8 {
        return Err("La contraseña debe tener al menos 8 caracteres".to_string());
    }
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err("La contraseña debe incluir letras y números".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        for email in ["usuario@example.com", "a.b@tienda.hn", " juan@mail.co "] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "sin-arroba.com", "@dominio.com", "user@", "user@dominio", "user@.com", "dos palabras@mail.com"] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn password_needs_length_letters_and_digits() {
        assert!(validate_password("abc1").is_err());
        assert!(validate_password("soloLetras").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password("clave123").is_ok());
    }
}
