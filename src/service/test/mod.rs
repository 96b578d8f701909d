mod article;
mod category;
mod image;
mod user;
