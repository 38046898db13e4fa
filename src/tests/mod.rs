mod country_code;
