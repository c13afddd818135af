mod chunk_utils;
mod scenarios;
