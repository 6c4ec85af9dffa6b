pub mod authenticate_user;
