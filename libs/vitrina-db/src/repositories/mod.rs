pub mod product_repo;
