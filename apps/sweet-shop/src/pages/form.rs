//! # Sweet Form
//!
//! The admin's add/edit form. Fields hold text exactly as typed and are
//! parsed only on submit.

use std::str::FromStr;

use sweets_core::validation::{parse_whole_number, ValidationResult};
use sweets_core::{Money, NewSweet, Sweet, SweetPatch};

/// One editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
    Quantity,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Quantity,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Price => "Price",
            FormField::Quantity => "Quantity",
            FormField::Description => "Description",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "category" => Ok(FormField::Category),
            "price" => Ok(FormField::Price),
            "quantity" | "qty" => Ok(FormField::Quantity),
            "description" | "desc" => Ok(FormField::Description),
            other => Err(format!(
                "unknown field '{}' (name, category, price, quantity, description)",
                other
            )),
        }
    }
}

/// Shared add/edit form record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweetForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl SweetForm {
    /// Pre-fills the form from an existing sweet.
    pub fn from_sweet(sweet: &Sweet) -> Self {
        SweetForm {
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price().to_plain_string(),
            quantity: sweet.quantity.to_string(),
            description: sweet.description.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Category => self.category = value,
            FormField::Price => self.price = value,
            FormField::Quantity => self.quantity = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn reset(&mut self) {
        *self = SweetForm::default();
    }

    fn parse_numbers(&self) -> ValidationResult<(i64, i64)> {
        let price = Money::parse_field("price", &self.price)?;
        let quantity = parse_whole_number("quantity", &self.quantity)?;
        Ok((price.cents(), quantity))
    }

    /// Create input. An empty description becomes `None`.
    ///
    /// Only parsing happens here; field rules are checked by the store.
    pub fn to_new_sweet(&self) -> ValidationResult<NewSweet> {
        let (price_cents, quantity) = self.parse_numbers()?;
        let description = self.description.trim();

        Ok(NewSweet {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price_cents,
            quantity,
            description: (!description.is_empty()).then(|| description.to_string()),
            image: None,
        })
    }

    /// Update input carrying every form field.
    pub fn to_patch(&self) -> ValidationResult<SweetPatch> {
        let (price_cents, quantity) = self.parse_numbers()?;

        Ok(SweetPatch {
            name: Some(self.name.trim().to_string()),
            category: Some(self.category.trim().to_string()),
            price_cents: Some(price_cents),
            quantity: Some(quantity),
            description: Some(self.description.trim().to_string()),
            image: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweets_core::ValidationError;

    fn filled() -> SweetForm {
        SweetForm {
            name: " Peppermint Bark ".to_string(),
            category: "Chocolate".to_string(),
            price: "7.5".to_string(),
            quantity: "12".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_to_new_sweet_parses_numbers() {
        let new = filled().to_new_sweet().unwrap();
        assert_eq!(new.name, "Peppermint Bark");
        assert_eq!(new.price_cents, 750);
        assert_eq!(new.quantity, 12);
        assert_eq!(new.description, None);
    }

    #[test]
    fn test_unparseable_price_is_rejected() {
        let mut form = filled();
        form.set(FormField::Price, "abc");
        assert!(matches!(
            form.to_new_sweet(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_unparseable_quantity_is_rejected() {
        let mut form = filled();
        form.set(FormField::Quantity, "1.5");
        assert!(form.to_patch().is_err());
    }

    #[test]
    fn test_from_sweet_round_trips_through_patch() {
        let sweet = Sweet {
            id: "1".to_string(),
            name: "Chocolate Truffles".to_string(),
            category: "Chocolate".to_string(),
            price_cents: 1299,
            quantity: 45,
            description: Some("Rich dark chocolate truffles".to_string()),
            image: None,
        };
        let form = SweetForm::from_sweet(&sweet);
        assert_eq!(form.price, "12.99");
        assert_eq!(form.quantity, "45");

        let mut patched = sweet.clone();
        patched.apply_patch(form.to_patch().unwrap());
        assert_eq!(patched, sweet);
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("qty".parse::<FormField>().unwrap(), FormField::Quantity);
        assert_eq!("Name".parse::<FormField>().unwrap(), FormField::Name);
        assert!("colour".parse::<FormField>().is_err());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, SweetForm::default());
    }
}
