use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::usuario;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agendamentos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub data_agendamento: Option<Date>,
    pub hora: Option<Time>,
    #[sea_orm(column_type = "Text", nullable)]
    pub observacoes: Option<String>,
    pub usuario_id: Option<i32>,
}

/// Owner lookup only; the table carries no foreign key.
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
