
mod catalog;
mod submit;
