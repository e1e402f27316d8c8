pub mod es_target;
