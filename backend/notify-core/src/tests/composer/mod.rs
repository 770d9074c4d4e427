mod address_list;
mod compose;
