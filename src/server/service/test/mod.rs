mod favorite;
mod planet;
