use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::usuario;

/// Status values stored in `fidelidades.status`.
pub const STATUS_ACTIVE: &str = "ativo";
pub const STATUS_CANCELLED: &str = "cancelado";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fidelidades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub usuario_id: Option<i32>,
    pub pontos: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Usuario,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Usuario => Entity::belongs_to(usuario::Entity)
                .from(Column::UsuarioId)
                .to(usuario::Column::Id)
                .into(),
        }
    }
}

impl Related<usuario::Entity> for Entity {
    fn to() -> RelationDef { Relation::Usuario.def() }
}

impl ActiveModelBehavior for ActiveModel {}
