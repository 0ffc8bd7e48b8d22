mod pixel;
