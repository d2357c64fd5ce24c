use serde::{Deserialize, Serialize};

/// Expense deletions report the id under `id_borrado`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseDeletedResponse {
    pub message: String,
    pub id_borrado: String,
}

/// Deletion acknowledgement for incomes, goals and categories.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id_eliminado: String,
}
