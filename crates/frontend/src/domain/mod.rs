pub mod a001_credit_card;
