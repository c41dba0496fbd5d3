//! # Presentation Contract
//!
//! [`FridgeView`] is what a front end drives. It keeps the last fetched list of
//! groceries, checks user input before anything reaches the API, and runs every
//! add and remove as two steps: a [`Proposal`] is built, shown, and only
//! committed once a [`Confirm`] implementation agrees.
//!
//! The view re-reads the full list after each successful change; the API has
//! no way to push updates.

use crate::api::FridgeApi;
use crate::commands::consume::BELOW_ONE;
use crate::error::{FridgeError, Result};
use crate::model::{Grocery, Item, Section};
use crate::store::DataStore;
use crate::view::{self, GroceryFilter, Sort};

/// A change waiting for the user's go-ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    Add {
        item: Item,
        section: Section,
        quantity: i64,
    },
    Remove {
        grocery: Grocery,
    },
}

impl Proposal {
    pub fn describe(&self) -> String {
        match self {
            Proposal::Add {
                item,
                section,
                quantity,
            } => format!("Add {} x {} to {}?", quantity, item.name, section),
            Proposal::Remove { grocery } => format!(
                "Delete ID: {}, Name: {}?",
                grocery.id,
                grocery.item_name()
            ),
        }
    }
}

pub trait Confirm {
    fn confirm(&mut self, proposal: &Proposal) -> Result<bool>;
}

/// Accepts every proposal (`--yes`, or confirmations turned off).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _proposal: &Proposal) -> Result<bool> {
        Ok(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Grocery),
    Removed(Grocery),
    Cancelled,
}

/// What to tell the user when consuming fails, if there is a better move.
pub fn consume_remedy(err: &FridgeError, id: i64) -> Option<String> {
    match err {
        FridgeError::Validation(msg) if msg == BELOW_ONE => {
            Some(format!("Remove grocery {} instead.", id))
        }
        _ => None,
    }
}

pub struct FridgeView<S: DataStore> {
    api: FridgeApi<S>,
    snapshot: Vec<Grocery>,
}

impl<S: DataStore> FridgeView<S> {
    pub fn new(api: FridgeApi<S>) -> Result<Self> {
        let mut view = Self {
            api,
            snapshot: Vec::new(),
        };
        view.refresh()?;
        Ok(view)
    }

    pub fn refresh(&mut self) -> Result<&[Grocery]> {
        self.snapshot = self.api.list_groceries()?;
        Ok(&self.snapshot)
    }

    pub fn snapshot(&self) -> &[Grocery] {
        &self.snapshot
    }

    /// Filtered and sorted rows from the current snapshot.
    pub fn visible(&self, filter: &GroceryFilter, order: Sort) -> Vec<Grocery> {
        let today = self.api.today();
        let mut rows = view::apply(&self.snapshot, filter, today);
        view::sort(&mut rows, order, today);
        rows
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        self.api.list_items()
    }

    pub fn find(&self, id: i64) -> Result<Option<Grocery>> {
        self.api.find_grocery(id)
    }

    pub fn propose_add(&self, item: &str, section: &str, quantity: &str) -> Result<Proposal> {
        let (item, section, quantity) = (item.trim(), section.trim(), quantity.trim());
        if item.is_empty() || section.is_empty() || quantity.is_empty() {
            return Err(FridgeError::validation(
                "item, section and quantity are all required",
            ));
        }

        let quantity = parse_quantity(quantity)?;
        let section: Section = section
            .parse()
            .map_err(|e: crate::model::UnknownSection| FridgeError::validation(e.to_string()))?;
        let item = self
            .api
            .find_item(item)?
            .ok_or_else(|| FridgeError::not_found(format!("item `{}` does not exist", item)))?;

        Ok(Proposal::Add {
            item,
            section,
            quantity,
        })
    }

    pub fn propose_remove(&self, id: i64) -> Result<Proposal> {
        let grocery = self
            .api
            .find_grocery(id)?
            .ok_or_else(|| FridgeError::not_found(format!("grocery id {} does not exist", id)))?;
        Ok(Proposal::Remove { grocery })
    }

    pub fn commit<C: Confirm + ?Sized>(
        &mut self,
        proposal: Proposal,
        confirmer: &mut C,
    ) -> Result<Outcome> {
        if !confirmer.confirm(&proposal)? {
            return Ok(Outcome::Cancelled);
        }

        match proposal {
            Proposal::Add {
                item,
                section,
                quantity,
            } => {
                let id = self.api.add_grocery(&item.name, quantity, section)?;
                self.refresh()?;
                let added = self
                    .snapshot
                    .iter()
                    .find(|g| g.id == id)
                    .cloned()
                    .ok_or_else(|| {
                        FridgeError::not_found(format!("grocery id {} does not exist", id))
                    })?;
                Ok(Outcome::Added(added))
            }
            Proposal::Remove { grocery } => {
                self.api.remove_grocery(grocery.id)?;
                self.refresh()?;
                Ok(Outcome::Removed(grocery))
            }
        }
    }

    /// Use up one unit. When only one is left this fails; see [`consume_remedy`].
    pub fn consume(&mut self, id: i64) -> Result<Grocery> {
        let updated = self.api.use_grocery(id)?;
        self.refresh()?;
        Ok(updated)
    }

    pub fn api(&self) -> &FridgeApi<S> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut FridgeApi<S> {
        &mut self.api
    }
}

fn parse_quantity(text: &str) -> Result<i64> {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(FridgeError::validation("quantity must be a number"));
    }
    let quantity: i64 = text
        .parse()
        .map_err(|_| FridgeError::validation("quantity is too large"))?;
    if quantity < 1 {
        return Err(FridgeError::validation("quantity must be at least 1"));
    }
    Ok(quantity)
}
