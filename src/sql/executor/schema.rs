use crate::{
    error::Result,
    sql::{engine::Engine, executor::{Executor, ResultSet}, parser::{self, ast::Dialect}},
};

/// TABLES executor, lists the schema's tables
pub struct ShowTables;

impl ShowTables {
    pub fn new() -> Box<Self> {
        Box::new(Self)
    }
}

impl<E: Engine> Executor<E> for ShowTables {
    fn execute(self: Box<Self>, engine: &mut E) -> Result<ResultSet> {
        let tables = engine
            .schema()
            .structure
            .iter()
            .map(|(name, columns)| (name.clone(), columns.clone()))
            .collect();
        Ok(ResultSet::Tables { tables })
    }
}

/// HELP executor
pub struct Help {
    dialect: Dialect,
}

impl Help {
    pub fn new(dialect: Dialect) -> Box<Self> {
        Box::new(Self { dialect })
    }
}

impl<E: Engine> Executor<E> for Help {
    fn execute(self: Box<Self>, _engine: &mut E) -> Result<ResultSet> {
        Ok(ResultSet::Help {
            text: parser::help_text(self.dialect),
        })
    }
}
