use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use serde::Deserialize;

use crate::entities::address;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewAddress {
    pub member_user_id: i32,
    pub house_number: String,
    pub street: String,
    pub town: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressChanges {
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
}

pub async fn create_address(
    db: &DatabaseConnection,
    input: NewAddress,
) -> AppResult<address::Model> {
    let now = Utc::now().naive_utc();
    let model = address::ActiveModel {
        member_user_id: Set(input.member_user_id),
        house_number: Set(input.house_number),
        street: Set(input.street),
        town: Set(input.town),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_addresses(db: &DatabaseConnection) -> AppResult<Vec<address::Model>> {
    Ok(address::Entity::find()
        .order_by_asc(address::Column::MemberUserId)
        .all(db)
        .await?)
}

pub async fn get_address(
    db: &DatabaseConnection,
    member_user_id: i32,
) -> AppResult<Option<address::Model>> {
    Ok(address::Entity::find_by_id(member_user_id).one(db).await?)
}

pub async fn update_address(
    db: &DatabaseConnection,
    member_user_id: i32,
    changes: AddressChanges,
) -> AppResult<address::Model> {
    let mut model = address::Entity::find_by_id(member_user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("address"))?
        .into_active_model();

    if let Some(house_number) = changes.house_number {
        model.house_number = Set(house_number);
    }
    if let Some(street) = changes.street {
        model.street = Set(street);
    }
    if let Some(town) = changes.town {
        model.town = Set(town);
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

pub async fn delete_address(db: &DatabaseConnection, member_user_id: i32) -> AppResult<()> {
    let result = address::Entity::delete_by_id(member_user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("address"));
    }

    Ok(())
}
