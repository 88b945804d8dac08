// src/services/chat_service.rs

use crate::{
    common::error::AppError,
    db::ChatRepository,
    models::{auth::User, chat::Message},
};

#[derive(Clone)]
pub struct ChatService {
    chat_repo: ChatRepository,
}

impl ChatService {
    pub fn new(chat_repo: ChatRepository) -> Self {
        Self { chat_repo }
    }

    /// Envia uma mensagem para o canal da empresa do usuário. A identidade
    /// de exibição é o e-mail da sessão.
    pub async fn send(&self, user: &User, body: &str) -> Result<Message, AppError> {
        let company_id = user.company_id_or_err()?;
        self.chat_repo.insert(company_id, &user.email, body).await
    }

    /// O snapshot do canal, em ordem crescente de criação. Mensagens de
    /// outras empresas nunca aparecem: o filtro é sempre pelo company_id
    /// da sessão, nunca por parâmetro do cliente.
    pub async fn messages(&self, user: &User) -> Result<Vec<Message>, AppError> {
        let company_id = user.company_id_or_err()?;
        self.chat_repo.list_for_company(company_id).await
    }
}
