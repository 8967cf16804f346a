pub mod add_form;
pub mod admin_list;
pub mod identity_card;
pub mod info_notice;
pub mod messages;
