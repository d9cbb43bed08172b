use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара. Назначается бэкендом (SQLite rowid), клиент его
/// никогда не генерирует.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id '{}': {}", s, e))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога в том виде, в каком его отдаёт `GET /api/products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub company: String,
    pub product_name: String,
    pub package_unit: String,
    #[serde(default)]
    pub contact: Option<String>,
}

impl Product {
    /// Contact as displayed in the form; missing contact is an empty string.
    pub fn contact_or_empty(&self) -> &str {
        self.contact.as_deref().unwrap_or("")
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса для создания (`POST`) и обновления (`PUT`) товара
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub company: String,
    pub product_name: String,
    pub package_unit: String,
    #[serde(default)]
    pub contact: Option<String>,
}

impl ProductDto {
    /// Валидация обязательных полей
    pub fn validate(&self) -> Result<(), String> {
        if self.company.trim().is_empty() {
            return Err("Компания не может быть пустой".into());
        }
        if self.product_name.trim().is_empty() {
            return Err("Наименование товара не может быть пустым".into());
        }
        if self.package_unit.trim().is_empty() {
            return Err("Единица упаковки не может быть пустой".into());
        }
        Ok(())
    }
}

/// Ответ бэкенда на успешную мутацию
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
