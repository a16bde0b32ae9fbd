use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// 自增序号，仅用于排序，不对外暴露
    #[sea_orm(primary_key)]
    pub id: i64,
    pub request_id: String,
    pub author: String,
    pub action: String,
    pub from_branch: String,
    pub to_branch: String,
    pub timestamp: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
