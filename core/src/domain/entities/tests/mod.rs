mod token_tests;
mod word_tests;
