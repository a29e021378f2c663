//! Equipment service

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::EquipmentStore,
};

#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<dyn EquipmentStore>,
}

impl EquipmentService {
    pub fn new(store: Arc<dyn EquipmentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        let oid = parse_id(id)?;
        self.store
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Validate and insert, applying defaults for omitted fields
    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        let record = self.store.insert(data.into_record(DateTime::now())).await?;
        tracing::info!(
            "Created equipment {} of type '{}'",
            record.id.map(|id| id.to_hex()).unwrap_or_default(),
            record.equipment_type
        );
        Ok(record)
    }

    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let oid = parse_id(id)?;

        self.store
            .update(oid, data.to_set_document(DateTime::now()))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let oid = parse_id(id)?;
        if !self.store.delete(oid).await? {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        tracing::info!("Deleted equipment {}", id);
        Ok(())
    }
}

fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::Validation(format!("Invalid equipment id: {}", id)))
}
