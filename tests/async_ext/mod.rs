mod future_ext;
