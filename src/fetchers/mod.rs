pub mod geocoded_movies_fetcher;
