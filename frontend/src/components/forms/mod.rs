pub mod add_design_form;
