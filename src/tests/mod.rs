mod decorate;
mod factory_copy;
