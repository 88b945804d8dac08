// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;

// O papel do usuário: a única fonte de verdade de autorização.
// `Default = NewUser` é o fallback conservador: enquanto o perfil não
// resolve, nenhuma ação elevada aparece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum Role {
    #[default]
    NewUser,
    Employee,
    Employer,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    #[schema(example = "+5511999990000")]
    pub contact_number: String,

    pub role: Role,

    // Nulo enquanto o usuário não cria nem entra numa empresa
    pub company_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Falha se o usuário já tem vínculo com uma empresa. Os serviços chamam
    /// isto duas vezes: no snapshot da sessão (resposta rápida) e de novo na
    /// linha travada dentro da transação (o snapshot pode estar velho).
    pub fn ensure_unaffiliated(&self) -> Result<(), AppError> {
        if self.company_id.is_some() {
            return Err(AppError::AlreadyInCompany);
        }
        Ok(())
    }

    /// O company_id da sessão, ou `NotInCompany`.
    pub fn company_id_or_err(&self) -> Result<Uuid, AppError> {
        self.company_id.ok_or(AppError::NotInCompany)
    }
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "a@x.com")]
    pub email: String,

    #[validate(
        length(min = 8, message = "A senha deve ter no mínimo 8 caracteres."),
        custom(function = "validate_password_strength")
    )]
    pub password: String,

    #[validate(must_match(other = "password", message = "As senhas não coincidem."))]
    pub confirm_password: String,

    #[validate(custom(function = "validate_contact_number"))]
    #[schema(example = "+5511999990000")]
    pub contact_number: String,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub password: String,
}

// Início do fluxo de redefinição de senha: e-mail + telefone cadastrado.
// A verificação real por SMS é um colaborador externo; aqui o passo devolve
// um token de redefinição de vida curta.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(custom(function = "validate_contact_number"))]
    pub contact_number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordPayload {
    pub token: String,

    #[validate(
        length(min = 8, message = "A senha deve ter no mínimo 8 caracteres."),
        custom(function = "validate_password_strength")
    )]
    pub new_password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetTokenResponse {
    pub reset_token: String,
}

// Estrutura de dados ("claims") dentro do JWT de sessão
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// Claims do token de redefinição de senha. O campo `purpose` impede que um
// token de sessão seja aceito no endpoint de redefinição (e vice-versa).
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    pub sub: Uuid,
    pub purpose: String,
    pub exp: usize,
    pub iat: usize,
}

pub const RESET_PURPOSE: &str = "password_reset";

// Regra da tela de cadastro: pelo menos um caractere especial.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_special = password.chars().any(|c| !c.is_alphanumeric());
    if !has_special {
        let mut err = ValidationError::new("password_strength");
        err.message = Some("A senha deve conter ao menos um caractere especial.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_contact_number(contact: &str) -> Result<(), ValidationError> {
    let digits = contact.strip_prefix('+').unwrap_or(contact);
    let valid = !digits.is_empty()
        && digits.len() >= 8
        && digits.len() <= 15
        && digits.chars().all(|c| c.is_ascii_digit());
    if !valid {
        let mut err = ValidationError::new("contact_number");
        err.message = Some("O número de contato fornecido é inválido.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(password: &str, confirm: &str, contact: &str) -> RegisterUserPayload {
        RegisterUserPayload {
            email: "a@x.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            contact_number: contact.to_string(),
        }
    }

    #[test]
    fn register_accepts_strong_password() {
        let p = payload("segredo#123", "segredo#123", "+5511999990000");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn register_rejects_short_password() {
        let p = payload("a#1", "a#1", "+5511999990000");
        assert!(p.validate().is_err());
    }

    #[test]
    fn register_rejects_password_without_special_char() {
        let p = payload("somenteletras1", "somenteletras1", "+5511999990000");
        assert!(p.validate().is_err());
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let p = payload("segredo#123", "outra#coisa", "+5511999990000");
        assert!(p.validate().is_err());
    }

    #[test]
    fn register_rejects_bad_contact_number() {
        let p = payload("segredo#123", "segredo#123", "abc123");
        assert!(p.validate().is_err());
    }

    #[test]
    fn default_role_is_new_user() {
        assert_eq!(Role::default(), Role::NewUser);
    }

    fn user_with_company(company_id: Option<Uuid>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            contact_number: "+5511999990000".to_string(),
            role: Role::NewUser,
            company_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unaffiliated_user_passes_affiliation_guard() {
        assert!(user_with_company(None).ensure_unaffiliated().is_ok());
    }

    #[test]
    fn affiliated_user_fails_affiliation_guard() {
        let user = user_with_company(Some(Uuid::new_v4()));
        assert!(matches!(
            user.ensure_unaffiliated(),
            Err(AppError::AlreadyInCompany)
        ));
    }

    #[test]
    fn company_id_or_err_requires_affiliation() {
        let id = Uuid::new_v4();
        assert_eq!(user_with_company(Some(id)).company_id_or_err().unwrap(), id);
        assert!(matches!(
            user_with_company(None).company_id_or_err(),
            Err(AppError::NotInCompany)
        ));
    }
}
