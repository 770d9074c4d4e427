mod interfaces;
