use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::dtos::{
    requests::{
        CompletionFlag, ContributionRequest, CreateCategoryRequest, CreateExpenseRequest,
        CreateGoalRequest, CreateIncomeRequest, CredentialsRequest, UpdateCategoryRequest,
        UpdateExpenseRequest, UpdateGoalRequest, UpdateIncomeRequest,
    },
    responses::{DeletedResponse, ExpenseDeletedResponse},
};
use crate::client::{format::round_cents, local_list::LocalList};
use crate::domain::models::{
    category::Category, expense::Expense, goal::Goal, income::Income,
    user::{User, UserIdentity},
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server responded {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Goal {0} is not loaded")]
    UnknownGoal(String),
    #[error("Contribution must be a positive amount")]
    InvalidContribution,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Typed access to the finance API.
///
/// Login only records the returned identity locally; every request carries
/// the user id explicitly, matching the server, which has no sessions.
pub struct FinanceClient {
    client: Client,
    base_url: String,
    session: Option<UserIdentity>,
}

impl FinanceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            session: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let res = request.send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(text);
            warn!("API request failed. Status: {}, Error: {}", status, message);
            return Err(ClientError::Api { status: status.as_u16(), message });
        }

        Ok(res.json::<T>().await?)
    }

    // --- Users ---

    pub async fn register(&self, username: &str, password: &str) -> Result<User, ClientError> {
        let body = CredentialsRequest {
            nombre_usuario: Some(username.to_string()),
            contrasena: Some(password.to_string()),
        };
        self.send(self.client.post(self.url("/usuarios")).json(&body)).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserIdentity, ClientError> {
        let body = CredentialsRequest {
            nombre_usuario: Some(username.to_string()),
            contrasena: Some(password.to_string()),
        };
        let identity: UserIdentity = self.send(self.client.post(self.url("/login")).json(&body)).await?;
        debug!("Logged in as {} ({})", identity.username, identity.id);
        self.session = Some(identity.clone());
        Ok(identity)
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn current_user(&self) -> Option<&UserIdentity> {
        self.session.as_ref()
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.send(self.client.get(self.url("/usuarios"))).await
    }

    // --- Categories ---

    pub async fn list_categories(&self, user_id: i64) -> Result<Vec<Category>, ClientError> {
        self.send(self.client.get(self.url(&format!("/categorias/usuario/{}", user_id)))).await
    }

    pub async fn create_category(&self, user_id: i64, name: &str) -> Result<Category, ClientError> {
        let body = CreateCategoryRequest {
            nombre: Some(name.to_string()),
            usuario_id: Some(user_id),
        };
        self.send(self.client.post(self.url("/categorias")).json(&body)).await
    }

    pub async fn update_category(&self, id: i64, user_id: i64, name: &str) -> Result<Category, ClientError> {
        let body = UpdateCategoryRequest {
            nombre: Some(name.to_string()),
            usuario_id: Some(user_id),
        };
        self.send(self.client.put(self.url(&format!("/categorias/{}", id))).json(&body)).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<DeletedResponse, ClientError> {
        self.send(self.client.delete(self.url(&format!("/categorias/{}", id)))).await
    }

    // --- Expenses ---

    pub async fn list_expenses(&self, user_id: i64) -> Result<Vec<Expense>, ClientError> {
        self.send(self.client.get(self.url(&format!("/gastos/usuario/{}", user_id)))).await
    }

    pub async fn create_expense(
        &self,
        user_id: i64,
        description: &str,
        amount: f64,
        category_id: Option<i64>,
    ) -> Result<Expense, ClientError> {
        let body = CreateExpenseRequest {
            descripcion: Some(description.to_string()),
            monto: Some(amount),
            usuario_id: Some(user_id),
            categoria_id: category_id,
        };
        self.send(self.client.post(self.url("/gastos")).json(&body)).await
    }

    pub async fn update_expense(
        &self,
        id: &str,
        description: &str,
        amount: f64,
        category_id: Option<i64>,
    ) -> Result<Expense, ClientError> {
        let body = UpdateExpenseRequest {
            descripcion: Some(description.to_string()),
            monto: Some(amount),
            categoria_id: category_id,
        };
        self.send(self.client.put(self.url(&format!("/gastos/{}", id))).json(&body)).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<ExpenseDeletedResponse, ClientError> {
        self.send(self.client.delete(self.url(&format!("/gastos/{}", id)))).await
    }

    // --- Incomes ---

    pub async fn list_incomes(&self, user_id: i64) -> Result<Vec<Income>, ClientError> {
        self.send(self.client.get(self.url(&format!("/ingresos/usuario/{}", user_id)))).await
    }

    pub async fn create_income(&self, user_id: i64, description: &str, amount: f64) -> Result<Income, ClientError> {
        let body = CreateIncomeRequest {
            usuario_id: Some(user_id),
            descripcion: Some(description.to_string()),
            monto: Some(amount),
        };
        self.send(self.client.post(self.url("/ingresos")).json(&body)).await
    }

    pub async fn update_income(&self, id: &str, description: &str, amount: f64) -> Result<Income, ClientError> {
        let body = UpdateIncomeRequest {
            descripcion: Some(description.to_string()),
            monto: Some(amount),
        };
        self.send(self.client.put(self.url(&format!("/ingresos/{}", id))).json(&body)).await
    }

    pub async fn delete_income(&self, id: &str) -> Result<DeletedResponse, ClientError> {
        self.send(self.client.delete(self.url(&format!("/ingresos/{}", id)))).await
    }

    // --- Goals ---

    pub async fn list_goals(&self, user_id: i64) -> Result<Vec<Goal>, ClientError> {
        self.send(self.client.get(self.url(&format!("/objetivos/usuario/{}", user_id)))).await
    }

    pub async fn create_goal(
        &self,
        user_id: i64,
        name: &str,
        target_amount: f64,
        current_amount: Option<f64>,
        deadline: Option<NaiveDate>,
    ) -> Result<Goal, ClientError> {
        let body = CreateGoalRequest {
            usuario_id: Some(user_id),
            nombre: Some(name.to_string()),
            monto_meta: Some(target_amount),
            monto_actual: current_amount,
            fecha_limite: deadline,
        };
        self.send(self.client.post(self.url("/objetivos")).json(&body)).await
    }

    /// Sends every editable field of `goal`, including its completion flag.
    pub async fn update_goal(&self, goal: &Goal) -> Result<Goal, ClientError> {
        let body = UpdateGoalRequest {
            nombre: Some(goal.name.clone()),
            monto_meta: Some(goal.target_amount),
            monto_actual: Some(goal.current_amount),
            fecha_limite: goal.deadline,
            completado: Some(CompletionFlag::Int(i64::from(goal.completed))),
        };
        self.send(self.client.put(self.url(&format!("/objetivos/{}", goal.id))).json(&body)).await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<DeletedResponse, ClientError> {
        self.send(self.client.delete(self.url(&format!("/objetivos/{}", id)))).await
    }

    /// Adds `amount` to a goal using the locally loaded copy: the new total is
    /// computed here and written back with a full update. Two clients doing this
    /// at once can lose a contribution; see [`Self::contribute_to_goal_atomic`].
    pub async fn contribute_to_goal(
        &self,
        goals: &mut LocalList<Goal>,
        goal_id: &str,
        amount: f64,
    ) -> Result<Goal, ClientError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ClientError::InvalidContribution);
        }

        let mut goal = goals
            .get(&goal_id.to_string())
            .cloned()
            .ok_or_else(|| ClientError::UnknownGoal(goal_id.to_string()))?;
        goal.current_amount = round_cents(goal.current_amount + amount);

        let updated = self.update_goal(&goal).await?;
        goals.upsert(updated.clone());
        Ok(updated)
    }

    /// Server-side increment; the stored amount is read and written in one statement.
    pub async fn contribute_to_goal_atomic(&self, goal_id: &str, amount: f64) -> Result<Goal, ClientError> {
        let body = ContributionRequest { monto: Some(amount) };
        self.send(self.client.post(self.url(&format!("/objetivos/{}/aportes", goal_id))).json(&body)).await
    }
}
