pub(crate) mod health_gauge;
pub(crate) mod info_card;
pub(crate) mod pagination;
pub(crate) mod table;
