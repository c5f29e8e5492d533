//! The reference table of space-group settings.
//!
//! Each entry has the form `number[:ext];schoenflies;hermann-mauguin[:ext];hall`, all lowercase.
//! The order of the entries is significant: the resolver scans the table from the top and
//! returns the first matching setting.

pub(super) static SPACE_GROUP_DEFINITIONS: [&str; 593] = [
    r#"1;c1^1;p 1;p 1"#,
    r#"2;ci^1;p -1;-p 1"#,
    r#"3:b;c2^1;p 1 2 1;p 2y"#,
    r#"3:b;c2^1;p 2;p 2y"#,
    r#"3:c;c2^1;p 1 1 2;p 2"#,
    r#"3:a;c2^1;p 2 1 1;p 2x"#,
    r#"4:b;c2^2;p 1 21 1;p 2yb"#,
    r#"4:b;c2^2;p 21;p 2yb"#,
    r#"4:b*;c2^2;p 1 21 1*;p 2y1"#,
    r#"4:c;c2^2;p 1 1 21;p 2c"#,
    r#"4:c*;c2^2;p 1 1 21*;p 21"#,
    r#"4:a;c2^2;p 21 1 1;p 2xa"#,
    r#"4:a*;c2^2;p 21 1 1*;p 2x1"#,
    r#"5:b1;c2^3;c 1 2 1;c 2y"#,
    r#"5:b1;c2^3;c 2;c 2y"#,
    r#"5:b2;c2^3;a 1 2 1;a 2y"#,
    r#"5:b3;c2^3;i 1 2 1;i 2y"#,
    r#"5:c1;c2^3;a 1 1 2;a 2"#,
    r#"5:c2;c2^3;b 1 1 2;b 2"#,
    r#"5:c3;c2^3;i 1 1 2;i 2"#,
    r#"5:a1;c2^3;b 2 1 1;b 2x"#,
    r#"5:a2;c2^3;c 2 1 1;c 2x"#,
    r#"5:a3;c2^3;i 2 1 1;i 2x"#,
    r#"6:b;cs^1;p 1 m 1;p -2y"#,
    r#"6:b;cs^1;p m;p -2y"#,
    r#"6:c;cs^1;p 1 1 m;p -2"#,
    r#"6:a;cs^1;p m 1 1;p -2x"#,
    r#"7:b1;cs^2;p 1 c 1;p -2yc"#,
    r#"7:b1;cs^2;p c;p -2yc"#,
    r#"7:b2;cs^2;p 1 n 1;p -2yac"#,
    r#"7:b2;cs^2;p n;p -2yac"#,
    r#"7:b3;cs^2;p 1 a 1;p -2ya"#,
    r#"7:b3;cs^2;p a;p -2ya"#,
    r#"7:c1;cs^2;p 1 1 a;p -2a"#,
    r#"7:c2;cs^2;p 1 1 n;p -2ab"#,
    r#"7:c3;cs^2;p 1 1 b;p -2b"#,
    r#"7:a1;cs^2;p b 1 1;p -2xb"#,
    r#"7:a2;cs^2;p n 1 1;p -2xbc"#,
    r#"7:a3;cs^2;p c 1 1;p -2xc"#,
    r#"8:b1;cs^3;c 1 m 1;c -2y"#,
    r#"8:b1;cs^3;c m;c -2y"#,
    r#"8:b2;cs^3;a 1 m 1;a -2y"#,
    r#"8:b3;cs^3;i 1 m 1;i -2y"#,
    r#"8:b3;cs^3;i m;i -2y"#,
    r#"8:c1;cs^3;a 1 1 m;a -2"#,
    r#"8:c2;cs^3;b 1 1 m;b -2"#,
    r#"8:c3;cs^3;i 1 1 m;i -2"#,
    r#"8:a1;cs^3;b m 1 1;b -2x"#,
    r#"8:a2;cs^3;c m 1 1;c -2x"#,
    r#"8:a3;cs^3;i m 1 1;i -2x"#,
    r#"9:b1;cs^4;c 1 c 1;c -2yc"#,
    r#"9:b1;cs^4;c c;c -2yc"#,
    r#"9:b2;cs^4;a 1 n 1;a -2yab"#,
    r#"9:b3;cs^4;i 1 a 1;i -2ya"#,
    r#"9:-b1;cs^4;a 1 a 1;a -2ya"#,
    r#"9:-b2;cs^4;c 1 n 1;c -2yac"#,
    r#"9:-b3;cs^4;i 1 c 1;i -2yc"#,
    r#"9:c1;cs^4;a 1 1 a;a -2a"#,
    r#"9:c2;cs^4;b 1 1 n;b -2ab"#,
    r#"9:c3;cs^4;i 1 1 b;i -2b"#,
    r#"9:-c1;cs^4;b 1 1 b;b -2b"#,
    r#"9:-c2;cs^4;a 1 1 n;a -2ab"#,
    r#"9:-c3;cs^4;i 1 1 a;i -2a"#,
    r#"9:a1;cs^4;b b 1 1;b -2xb"#,
    r#"9:a2;cs^4;c n 1 1;c -2xac"#,
    r#"9:a3;cs^4;i c 1 1;i -2xc"#,
    r#"9:-a1;cs^4;c c 1 1;c -2xc"#,
    r#"9:-a2;cs^4;b n 1 1;b -2xab"#,
    r#"9:-a3;cs^4;i b 1 1;i -2xb"#,
    r#"10:b;c2h^1;p 1 2/m 1;-p 2y"#,
    r#"10:b;c2h^1;p 2/m;-p 2y"#,
    r#"10:c;c2h^1;p 1 1 2/m;-p 2"#,
    r#"10:a;c2h^1;p 2/m 1 1;-p 2x"#,
    r#"11:b;c2h^2;p 1 21/m 1;-p 2yb"#,
    r#"11:b;c2h^2;p 21/m;-p 2yb"#,
    r#"11:b*;c2h^2;p 1 21/m 1*;-p 2y1"#,
    r#"11:c;c2h^2;p 1 1 21/m;-p 2c"#,
    r#"11:c*;c2h^2;p 1 1 21/m*;-p 21"#,
    r#"11:a;c2h^2;p 21/m 1 1;-p 2xa"#,
    r#"11:a*;c2h^2;p 21/m 1 1*;-p 2x1"#,
    r#"12:b1;c2h^3;c 1 2/m 1;-c 2y"#,
    r#"12:b1;c2h^3;c 2/m;-c 2y"#,
    r#"12:b2;c2h^3;a 1 2/m 1;-a 2y"#,
    r#"12:b3;c2h^3;i 1 2/m 1;-i 2y"#,
    r#"12:b3;c2h^3;i 2/m;-i 2y"#,
    r#"12:c1;c2h^3;a 1 1 2/m;-a 2"#,
    r#"12:c2;c2h^3;b 1 1 2/m;-b 2"#,
    r#"12:c3;c2h^3;i 1 1 2/m;-i 2"#,
    r#"12:a1;c2h^3;b 2/m 1 1;-b 2x"#,
    r#"12:a2;c2h^3;c 2/m 1 1;-c 2x"#,
    r#"12:a3;c2h^3;i 2/m 1 1;-i 2x"#,
    r#"13:b1;c2h^4;p 1 2/c 1;-p 2yc"#,
    r#"13:b1;c2h^4;p 2/c;-p 2yc"#,
    r#"13:b2;c2h^4;p 1 2/n 1;-p 2yac"#,
    r#"13:b2;c2h^4;p 2/n;-p 2yac"#,
    r#"13:b3;c2h^4;p 1 2/a 1;-p 2ya"#,
    r#"13:b3;c2h^4;p 2/a;-p 2ya"#,
    r#"13:c1;c2h^4;p 1 1 2/a;-p 2a"#,
    r#"13:c2;c2h^4;p 1 1 2/n;-p 2ab"#,
    r#"13:c3;c2h^4;p 1 1 2/b;-p 2b"#,
    r#"13:a1;c2h^4;p 2/b 1 1;-p 2xb"#,
    r#"13:a2;c2h^4;p 2/n 1 1;-p 2xbc"#,
    r#"13:a3;c2h^4;p 2/c 1 1;-p 2xc"#,
    r#"14:b1;c2h^5;p 1 21/c 1;-p 2ybc"#,
    r#"14:b1;c2h^5;p 21/c;-p 2ybc"#,
    r#"14:b2;c2h^5;p 1 21/n 1;-p 2yn"#,
    r#"14:b2;c2h^5;p 21/n;-p 2yn"#,
    r#"14:b3;c2h^5;p 1 21/a 1;-p 2yab"#,
    r#"14:b3;c2h^5;p 21/a;-p 2yab"#,
    r#"14:c1;c2h^5;p 1 1 21/a;-p 2ac"#,
    r#"14:c2;c2h^5;p 1 1 21/n;-p 2n"#,
    r#"14:c3;c2h^5;p 1 1 21/b;-p 2bc"#,
    r#"14:a1;c2h^5;p 21/b 1 1;-p 2xab"#,
    r#"14:a2;c2h^5;p 21/n 1 1;-p 2xn"#,
    r#"14:a3;c2h^5;p 21/c 1 1;-p 2xac"#,
    r#"15:b1;c2h^6;c 1 2/c 1;-c 2yc"#,
    r#"15:b1;c2h^6;c 2/c;-c 2yc"#,
    r#"15:b2;c2h^6;a 1 2/n 1;-a 2yab"#,
    r#"15:b3;c2h^6;i 1 2/a 1;-i 2ya"#,
    r#"15:b3;c2h^6;i 2/a;-i 2ya"#,
    r#"15:-b1;c2h^6;a 1 2/a 1;-a 2ya"#,
    r#"15:-b2;c2h^6;c 1 2/n 1;-c 2yac"#,
    r#"15:-b2;c2h^6;c 2/n;-c 2yac"#,
    r#"15:-b3;c2h^6;i 1 2/c 1;-i 2yc"#,
    r#"15:-b3;c2h^6;i 2/c;-i 2yc"#,
    r#"15:c1;c2h^6;a 1 1 2/a;-a 2a"#,
    r#"15:c2;c2h^6;b 1 1 2/n;-b 2ab"#,
    r#"15:c3;c2h^6;i 1 1 2/b;-i 2b"#,
    r#"15:-c1;c2h^6;b 1 1 2/b;-b 2b"#,
    r#"15:-c2;c2h^6;a 1 1 2/n;-a 2ab"#,
    r#"15:-c3;c2h^6;i 1 1 2/a;-i 2a"#,
    r#"15:a1;c2h^6;b 2/b 1 1;-b 2xb"#,
    r#"15:a2;c2h^6;c 2/n 1 1;-c 2xac"#,
    r#"15:a3;c2h^6;i 2/c 1 1;-i 2xc"#,
    r#"15:-a1;c2h^6;c 2/c 1 1;-c 2xc"#,
    r#"15:-a2;c2h^6;b 2/n 1 1;-b 2xab"#,
    r#"15:-a3;c2h^6;i 2/b 1 1;-i 2xb"#,
    r#"16;d2^1;p 2 2 2;p 2 2"#,
    r#"17;d2^2;p 2 2 21;p 2c 2"#,
    r#"17*;d2^2;p 2 2 21*;p 21 2"#,
    r#"17:cab;d2^2;p 21 2 2;p 2a 2a"#,
    r#"17:bca;d2^2;p 2 21 2;p 2 2b"#,
    r#"18;d2^3;p 21 21 2;p 2 2ab"#,
    r#"18:cab;d2^3;p 2 21 21;p 2bc 2"#,
    r#"18:bca;d2^3;p 21 2 21;p 2ac 2ac"#,
    r#"19;d2^4;p 21 21 21;p 2ac 2ab"#,
    r#"20;d2^5;c 2 2 21;c 2c 2"#,
    r#"20*;d2^5;c 2 2 21*;c 21 2"#,
    r#"20:cab;d2^5;a 21 2 2;a 2a 2a"#,
    r#"20:cab*;d2^5;a 21 2 2*;a 2a 21"#,
    r#"20:bca;d2^5;b 2 21 2;b 2 2b"#,
    r#"21;d2^6;c 2 2 2;c 2 2"#,
    r#"21:cab;d2^6;a 2 2 2;a 2 2"#,
    r#"21:bca;d2^6;b 2 2 2;b 2 2"#,
    r#"22;d2^7;f 2 2 2;f 2 2"#,
    r#"23;d2^8;i 2 2 2;i 2 2"#,
    r#"24;d2^9;i 21 21 21;i 2b 2c"#,
    r#"25;c2v^1;p m m 2;p 2 -2"#,
    r#"25:cab;c2v^1;p 2 m m;p -2 2"#,
    r#"25:bca;c2v^1;p m 2 m;p -2 -2"#,
    r#"26;c2v^2;p m c 21;p 2c -2"#,
    r#"26*;c2v^2;p m c 21*;p 21 -2"#,
    r#"26:ba-c;c2v^2;p c m 21;p 2c -2c"#,
    r#"26:ba-c*;c2v^2;p c m 21*;p 21 -2c"#,
    r#"26:cab;c2v^2;p 21 m a;p -2a 2a"#,
    r#"26:-cba;c2v^2;p 21 a m;p -2 2a"#,
    r#"26:bca;c2v^2;p b 21 m;p -2 -2b"#,
    r#"26:a-cb;c2v^2;p m 21 b;p -2b -2"#,
    r#"27;c2v^3;p c c 2;p 2 -2c"#,
    r#"27:cab;c2v^3;p 2 a a;p -2a 2"#,
    r#"27:bca;c2v^3;p b 2 b;p -2b -2b"#,
    r#"28;c2v^4;p m a 2;p 2 -2a"#,
    r#"28*;c2v^4;p m a 2*;p 2 -21"#,
    r#"28:ba-c;c2v^4;p b m 2;p 2 -2b"#,
    r#"28:cab;c2v^4;p 2 m b;p -2b 2"#,
    r#"28:-cba;c2v^4;p 2 c m;p -2c 2"#,
    r#"28:-cba*;c2v^4;p 2 c m*;p -21 2"#,
    r#"28:bca;c2v^4;p c 2 m;p -2c -2c"#,
    r#"28:a-cb;c2v^4;p m 2 a;p -2a -2a"#,
    r#"29;c2v^5;p c a 21;p 2c -2ac"#,
    r#"29:ba-c;c2v^5;p b c 21;p 2c -2b"#,
    r#"29:cab;c2v^5;p 21 a b;p -2b 2a"#,
    r#"29:-cba;c2v^5;p 21 c a;p -2ac 2a"#,
    r#"29:bca;c2v^5;p c 21 b;p -2bc -2c"#,
    r#"29:a-cb;c2v^5;p b 21 a;p -2a -2ab"#,
    r#"30;c2v^6;p n c 2;p 2 -2bc"#,
    r#"30:ba-c;c2v^6;p c n 2;p 2 -2ac"#,
    r#"30:cab;c2v^6;p 2 n a;p -2ac 2"#,
    r#"30:-cba;c2v^6;p 2 a n;p -2ab 2"#,
    r#"30:bca;c2v^6;p b 2 n;p -2ab -2ab"#,
    r#"30:a-cb;c2v^6;p n 2 b;p -2bc -2bc"#,
    r#"31;c2v^7;p m n 21;p 2ac -2"#,
    r#"31:ba-c;c2v^7;p n m 21;p 2bc -2bc"#,
    r#"31:cab;c2v^7;p 21 m n;p -2ab 2ab"#,
    r#"31:-cba;c2v^7;p 21 n m;p -2 2ac"#,
    r#"31:bca;c2v^7;p n 21 m;p -2 -2bc"#,
    r#"31:a-cb;c2v^7;p m 21 n;p -2ab -2"#,
    r#"32;c2v^8;p b a 2;p 2 -2ab"#,
    r#"32:cab;c2v^8;p 2 c b;p -2bc 2"#,
    r#"32:bca;c2v^8;p c 2 a;p -2ac -2ac"#,
    r#"33;c2v^9;p n a 21;p 2c -2n"#,
    r#"33*;c2v^9;p n a 21*;p 21 -2n"#,
    r#"33:ba-c;c2v^9;p b n 21;p 2c -2ab"#,
    r#"33:ba-c*;c2v^9;p b n 21*;p 21 -2ab"#,
    r#"33:cab;c2v^9;p 21 n b;p -2bc 2a"#,
    r#"33:cab*;c2v^9;p 21 n b*;p -2bc 21"#,
    r#"33:-cba;c2v^9;p 21 c n;p -2n 2a"#,
    r#"33:-cba*;c2v^9;p 21 c n*;p -2n 21"#,
    r#"33:bca;c2v^9;p c 21 n;p -2n -2ac"#,
    r#"33:a-cb;c2v^9;p n 21 a;p -2ac -2n"#,
    r#"34;c2v^10;p n n 2;p 2 -2n"#,
    r#"34:cab;c2v^10;p 2 n n;p -2n 2"#,
    r#"34:bca;c2v^10;p n 2 n;p -2n -2n"#,
    r#"35;c2v^11;c m m 2;c 2 -2"#,
    r#"35:cab;c2v^11;a 2 m m;a -2 2"#,
    r#"35:bca;c2v^11;b m 2 m;b -2 -2"#,
    r#"36;c2v^12;c m c 21;c 2c -2"#,
    r#"36*;c2v^12;c m c 21*;c 21 -2"#,
    r#"36:ba-c;c2v^12;c c m 21;c 2c -2c"#,
    r#"36:ba-c*;c2v^12;c c m 21*;c 21 -2c"#,
    r#"36:cab;c2v^12;a 21 m a;a -2a 2a"#,
    r#"36:cab*;c2v^12;a 21 m a*;a -2a 21"#,
    r#"36:-cba;c2v^12;a 21 a m;a -2 2a"#,
    r#"36:-cba*;c2v^12;a 21 a m*;a -2 21"#,
    r#"36:bca;c2v^12;b b 21 m;b -2 -2b"#,
    r#"36:a-cb;c2v^12;b m 21 b;b -2b -2"#,
    r#"37;c2v^13;c c c 2;c 2 -2c"#,
    r#"37:cab;c2v^13;a 2 a a;a -2a 2"#,
    r#"37:bca;c2v^13;b b 2 b;b -2b -2b"#,
    r#"38;c2v^14;a m m 2;a 2 -2"#,
    r#"38:ba-c;c2v^14;b m m 2;b 2 -2"#,
    r#"38:cab;c2v^14;b 2 m m;b -2 2"#,
    r#"38:-cba;c2v^14;c 2 m m;c -2 2"#,
    r#"38:bca;c2v^14;c m 2 m;c -2 -2"#,
    r#"38:a-cb;c2v^14;a m 2 m;a -2 -2"#,
    r#"39;c2v^15;a b m 2;a 2 -2b"#,
    r#"39:ba-c;c2v^15;b m a 2;b 2 -2a"#,
    r#"39:cab;c2v^15;b 2 c m;b -2a 2"#,
    r#"39:-cba;c2v^15;c 2 m b;c -2a 2"#,
    r#"39:bca;c2v^15;c m 2 a;c -2a -2a"#,
    r#"39:a-cb;c2v^15;a c 2 m;a -2b -2b"#,
    r#"40;c2v^16;a m a 2;a 2 -2a"#,
    r#"40:ba-c;c2v^16;b b m 2;b 2 -2b"#,
    r#"40:cab;c2v^16;b 2 m b;b -2b 2"#,
    r#"40:-cba;c2v^16;c 2 c m;c -2c 2"#,
    r#"40:bca;c2v^16;c c 2 m;c -2c -2c"#,
    r#"40:a-cb;c2v^16;a m 2 a;a -2a -2a"#,
    r#"41;c2v^17;a b a 2;a 2 -2ab"#,
    r#"41:ba-c;c2v^17;b b a 2;b 2 -2ab"#,
    r#"41:cab;c2v^17;b 2 c b;b -2ab 2"#,
    r#"41:-cba;c2v^17;c 2 c b;c -2ac 2"#,
    r#"41:bca;c2v^17;c c 2 a;c -2ac -2ac"#,
    r#"41:a-cb;c2v^17;a c 2 a;a -2ab -2ab"#,
    r#"42;c2v^18;f m m 2;f 2 -2"#,
    r#"42:cab;c2v^18;f 2 m m;f -2 2"#,
    r#"42:bca;c2v^18;f m 2 m;f -2 -2"#,
    r#"43;c2v^19;f d d 2;f 2 -2d"#,
    r#"43:cab;c2v^19;f 2 d d;f -2d 2"#,
    r#"43:bca;c2v^19;f d 2 d;f -2d -2d"#,
    r#"44;c2v^20;i m m 2;i 2 -2"#,
    r#"44:cab;c2v^20;i 2 m m;i -2 2"#,
    r#"44:bca;c2v^20;i m 2 m;i -2 -2"#,
    r#"45;c2v^21;i b a 2;i 2 -2c"#,
    r#"45:cab;c2v^21;i 2 c b;i -2a 2"#,
    r#"45:bca;c2v^21;i c 2 a;i -2b -2b"#,
    r#"46;c2v^22;i m a 2;i 2 -2a"#,
    r#"46:ba-c;c2v^22;i b m 2;i 2 -2b"#,
    r#"46:cab;c2v^22;i 2 m b;i -2b 2"#,
    r#"46:-cba;c2v^22;i 2 c m;i -2c 2"#,
    r#"46:bca;c2v^22;i c 2 m;i -2c -2c"#,
    r#"46:a-cb;c2v^22;i m 2 a;i -2a -2a"#,
    r#"47;d2h^1;p m m m;-p 2 2"#,
    r#"48:1;d2h^2;p n n n:1;p 2 2 -1n"#,
    r#"48:2;d2h^2;p n n n:2;-p 2ab 2bc"#,
    r#"49;d2h^3;p c c m;-p 2 2c"#,
    r#"49:cab;d2h^3;p m a a;-p 2a 2"#,
    r#"49:bca;d2h^3;p b m b;-p 2b 2b"#,
    r#"50:1;d2h^4;p b a n:1;p 2 2 -1ab"#,
    r#"50:2;d2h^4;p b a n:2;-p 2ab 2b"#,
    r#"50:1cab;d2h^4;p n c b:1;p 2 2 -1bc"#,
    r#"50:2cab;d2h^4;p n c b:2;-p 2b 2bc"#,
    r#"50:1bca;d2h^4;p c n a:1;p 2 2 -1ac"#,
    r#"50:2bca;d2h^4;p c n a:2;-p 2a 2c"#,
    r#"51;d2h^5;p m m a;-p 2a 2a"#,
    r#"51:ba-c;d2h^5;p m m b;-p 2b 2"#,
    r#"51:cab;d2h^5;p b m m;-p 2 2b"#,
    r#"51:-cba;d2h^5;p c m m;-p 2c 2c"#,
    r#"51:bca;d2h^5;p m c m;-p 2c 2"#,
    r#"51:a-cb;d2h^5;p m a m;-p 2 2a"#,
    r#"52;d2h^6;p n n a;-p 2a 2bc"#,
    r#"52:ba-c;d2h^6;p n n b;-p 2b 2n"#,
    r#"52:cab;d2h^6;p b n n;-p 2n 2b"#,
    r#"52:-cba;d2h^6;p c n n;-p 2ab 2c"#,
    r#"52:bca;d2h^6;p n c n;-p 2ab 2n"#,
    r#"52:a-cb;d2h^6;p n a n;-p 2n 2bc"#,
    r#"53;d2h^7;p m n a;-p 2ac 2"#,
    r#"53:ba-c;d2h^7;p n m b;-p 2bc 2bc"#,
    r#"53:cab;d2h^7;p b m n;-p 2ab 2ab"#,
    r#"53:-cba;d2h^7;p c n m;-p 2 2ac"#,
    r#"53:bca;d2h^7;p n c m;-p 2 2bc"#,
    r#"53:a-cb;d2h^7;p m a n;-p 2ab 2"#,
    r#"54;d2h^8;p c c a;-p 2a 2ac"#,
    r#"54:ba-c;d2h^8;p c c b;-p 2b 2c"#,
    r#"54:cab;d2h^8;p b a a;-p 2a 2b"#,
    r#"54:-cba;d2h^8;p c a a;-p 2ac 2c"#,
    r#"54:bca;d2h^8;p b c b;-p 2bc 2b"#,
    r#"54:a-cb;d2h^8;p b a b;-p 2b 2ab"#,
    r#"55;d2h^9;p b a m;-p 2 2ab"#,
    r#"55:cab;d2h^9;p m c b;-p 2bc 2"#,
    r#"55:bca;d2h^9;p c m a;-p 2ac 2ac"#,
    r#"56;d2h^10;p c c n;-p 2ab 2ac"#,
    r#"56:cab;d2h^10;p n a a;-p 2ac 2bc"#,
    r#"56:bca;d2h^10;p b n b;-p 2bc 2ab"#,
    r#"57;d2h^11;p b c m;-p 2c 2b"#,
    r#"57:ba-c;d2h^11;p c a m;-p 2c 2ac"#,
    r#"57:cab;d2h^11;p m c a;-p 2ac 2a"#,
    r#"57:-cba;d2h^11;p m a b;-p 2b 2a"#,
    r#"57:bca;d2h^11;p b m a;-p 2a 2ab"#,
    r#"57:a-cb;d2h^11;p c m b;-p 2bc 2c"#,
    r#"58;d2h^12;p n n m;-p 2 2n"#,
    r#"58:cab;d2h^12;p m n n;-p 2n 2"#,
    r#"58:bca;d2h^12;p n m n;-p 2n 2n"#,
    r#"59:1;d2h^13;p m m n:1;p 2 2ab -1ab"#,
    r#"59:2;d2h^13;p m m n:2;-p 2ab 2a"#,
    r#"59:1cab;d2h^13;p n m m:1;p 2bc 2 -1bc"#,
    r#"59:2cab;d2h^13;p n m m:2;-p 2c 2bc"#,
    r#"59:1bca;d2h^13;p m n m:1;p 2ac 2ac -1ac"#,
    r#"59:2bca;d2h^13;p m n m:2;-p 2c 2a"#,
    r#"60;d2h^14;p b c n;-p 2n 2ab"#,
    r#"60:ba-c;d2h^14;p c a n;-p 2n 2c"#,
    r#"60:cab;d2h^14;p n c a;-p 2a 2n"#,
    r#"60:-cba;d2h^14;p n a b;-p 2bc 2n"#,
    r#"60:bca;d2h^14;p b n a;-p 2ac 2b"#,
    r#"60:a-cb;d2h^14;p c n b;-p 2b 2ac"#,
    r#"61;d2h^15;p b c a;-p 2ac 2ab"#,
    r#"61:ba-c;d2h^15;p c a b;-p 2bc 2ac"#,
    r#"62;d2h^16;p n m a;-p 2ac 2n"#,
    r#"62:ba-c;d2h^16;p m n b;-p 2bc 2a"#,
    r#"62:cab;d2h^16;p b n m;-p 2c 2ab"#,
    r#"62:-cba;d2h^16;p c m n;-p 2n 2ac"#,
    r#"62:bca;d2h^16;p m c n;-p 2n 2a"#,
    r#"62:a-cb;d2h^16;p n a m;-p 2c 2n"#,
    r#"63;d2h^17;c m c m;-c 2c 2"#,
    r#"63:ba-c;d2h^17;c c m m;-c 2c 2c"#,
    r#"63:cab;d2h^17;a m m a;-a 2a 2a"#,
    r#"63:-cba;d2h^17;a m a m;-a 2 2a"#,
    r#"63:bca;d2h^17;b b m m;-b 2 2b"#,
    r#"63:a-cb;d2h^17;b m m b;-b 2b 2"#,
    r#"64;d2h^18;c m c a;-c 2ac 2"#,
    r#"64:ba-c;d2h^18;c c m b;-c 2ac 2ac"#,
    r#"64:cab;d2h^18;a b m a;-a 2ab 2ab"#,
    r#"64:-cba;d2h^18;a c a m;-a 2 2ab"#,
    r#"64:bca;d2h^18;b b c m;-b 2 2ab"#,
    r#"64:a-cb;d2h^18;b m a b;-b 2ab 2"#,
    r#"65;d2h^19;c m m m;-c 2 2"#,
    r#"65:cab;d2h^19;a m m m;-a 2 2"#,
    r#"65:bca;d2h^19;b m m m;-b 2 2"#,
    r#"66;d2h^20;c c c m;-c 2 2c"#,
    r#"66:cab;d2h^20;a m a a;-a 2a 2"#,
    r#"66:bca;d2h^20;b b m b;-b 2b 2b"#,
    r#"67;d2h^21;c m m a;-c 2a 2"#,
    r#"67:ba-c;d2h^21;c m m b;-c 2a 2a"#,
    r#"67:cab;d2h^21;a b m m;-a 2b 2b"#,
    r#"67:-cba;d2h^21;a c m m;-a 2 2b"#,
    r#"67:bca;d2h^21;b m c m;-b 2 2a"#,
    r#"67:a-cb;d2h^21;b m a m;-b 2a 2"#,
    r#"68:1;d2h^22;c c c a:1;c 2 2 -1ac"#,
    r#"68:2;d2h^22;c c c a:2;-c 2a 2ac"#,
    r#"68:1ba-c;d2h^22;c c c b:1;c 2 2 -1ac"#,
    r#"68:2ba-c;d2h^22;c c c b:2;-c 2a 2c"#,
    r#"68:1cab;d2h^22;a b a a:1;a 2 2 -1ab"#,
    r#"68:2cab;d2h^22;a b a a:2;-a 2a 2b"#,
    r#"68:1-cba;d2h^22;a c a a:1;a 2 2 -1ab"#,
    r#"68:2-cba;d2h^22;a c a a:2;-a 2ab 2b"#,
    r#"68:1bca;d2h^22;b b c b:1;b 2 2 -1ab"#,
    r#"68:2bca;d2h^22;b b c b:2;-b 2ab 2b"#,
    r#"68:1a-cb;d2h^22;b b a b:1;b 2 2 -1ab"#,
    r#"68:2a-cb;d2h^22;b b a b:2;-b 2b 2ab"#,
    r#"69;d2h^23;f m m m;-f 2 2"#,
    r#"70:1;d2h^24;f d d d:1;f 2 2 -1d"#,
    r#"70:2;d2h^24;f d d d:2;-f 2uv 2vw"#,
    r#"71;d2h^25;i m m m;-i 2 2"#,
    r#"72;d2h^26;i b a m;-i 2 2c"#,
    r#"72:cab;d2h^26;i m c b;-i 2a 2"#,
    r#"72:bca;d2h^26;i c m a;-i 2b 2b"#,
    r#"73;d2h^27;i b c a;-i 2b 2c"#,
    r#"73:ba-c;d2h^27;i c a b;-i 2a 2b"#,
    r#"74;d2h^28;i m m a;-i 2b 2"#,
    r#"74:ba-c;d2h^28;i m m b;-i 2a 2a"#,
    r#"74:cab;d2h^28;i b m m;-i 2c 2c"#,
    r#"74:-cba;d2h^28;i c m m;-i 2 2b"#,
    r#"74:bca;d2h^28;i m c m;-i 2 2a"#,
    r#"74:a-cb;d2h^28;i m a m;-i 2c 2"#,
    r#"75;c4^1;p 4;p 4"#,
    r#"76;c4^2;p 41;p 4w"#,
    r#"76*;c4^2;p 41*;p 41"#,
    r#"77;c4^3;p 42;p 4c"#,
    r#"77*;c4^3;p 42*;p 42"#,
    r#"78;c4^4;p 43;p 4cw"#,
    r#"78*;c4^4;p 43*;p 43"#,
    r#"79;c4^5;i 4;i 4"#,
    r#"80;c4^6;i 41;i 4bw"#,
    r#"81;s4^1;p -4;p -4"#,
    r#"82;s4^2;i -4;i -4"#,
    r#"83;c4h^1;p 4/m;-p 4"#,
    r#"84;c4h^2;p 42/m;-p 4c"#,
    r#"84*;c4h^2;p 42/m*;-p 42"#,
    r#"85:1;c4h^3;p 4/n:1;p 4ab -1ab"#,
    r#"85:2;c4h^3;p 4/n:2;-p 4a"#,
    r#"86:1;c4h^4;p 42/n:1;p 4n -1n"#,
    r#"86:2;c4h^4;p 42/n:2;-p 4bc"#,
    r#"87;c4h^5;i 4/m;-i 4"#,
    r#"88:1;c4h^6;i 41/a:1;i 4bw -1bw"#,
    r#"88:2;c4h^6;i 41/a:2;-i 4ad"#,
    r#"89;d4^1;p 4 2 2;p 4 2"#,
    r#"90;d4^2;p 4 21 2;p 4ab 2ab"#,
    r#"91;d4^3;p 41 2 2;p 4w 2c"#,
    r#"91*;d4^3;p 41 2 2*;p 41 2c"#,
    r#"92;d4^4;p 41 21 2;p 4abw 2nw"#,
    r#"93;d4^5;p 42 2 2;p 4c 2"#,
    r#"93*;d4^5;p 42 2 2*;p 42 2"#,
    r#"94;d4^6;p 42 21 2;p 4n 2n"#,
    r#"95;d4^7;p 43 2 2;p 4cw 2c"#,
    r#"95*;d4^7;p 43 2 2*;p 43 2c"#,
    r#"96;d4^8;p 43 21 2;p 4nw 2abw"#,
    r#"97;d4^9;i 4 2 2;i 4 2"#,
    r#"98;d4^10;i 41 2 2;i 4bw 2bw"#,
    r#"99;c4v^1;p 4 m m;p 4 -2"#,
    r#"100;c4v^2;p 4 b m;p 4 -2ab"#,
    r#"101;c4v^3;p 42 c m;p 4c -2c"#,
    r#"101*;c4v^3;p 42 c m*;p 42 -2c"#,
    r#"102;c4v^4;p 42 n m;p 4n -2n"#,
    r#"103;c4v^5;p 4 c c;p 4 -2c"#,
    r#"104;c4v^6;p 4 n c;p 4 -2n"#,
    r#"105;c4v^7;p 42 m c;p 4c -2"#,
    r#"105*;c4v^7;p 42 m c*;p 42 -2"#,
    r#"106;c4v^8;p 42 b c;p 4c -2ab"#,
    r#"106*;c4v^8;p 42 b c*;p 42 -2ab"#,
    r#"107;c4v^9;i 4 m m;i 4 -2"#,
    r#"108;c4v^10;i 4 c m;i 4 -2c"#,
    r#"109;c4v^11;i 41 m d;i 4bw -2"#,
    r#"110;c4v^12;i 41 c d;i 4bw -2c"#,
    r#"111;d2d^1;p -4 2 m;p -4 2"#,
    r#"112;d2d^2;p -4 2 c;p -4 2c"#,
    r#"113;d2d^3;p -4 21 m;p -4 2ab"#,
    r#"114;d2d^4;p -4 21 c;p -4 2n"#,
    r#"115;d2d^5;p -4 m 2;p -4 -2"#,
    r#"116;d2d^6;p -4 c 2;p -4 -2c"#,
    r#"117;d2d^7;p -4 b 2;p -4 -2ab"#,
    r#"118;d2d^8;p -4 n 2;p -4 -2n"#,
    r#"119;d2d^9;i -4 m 2;i -4 -2"#,
    r#"120;d2d^10;i -4 c 2;i -4 -2c"#,
    r#"121;d2d^11;i -4 2 m;i -4 2"#,
    r#"122;d2d^12;i -4 2 d;i -4 2bw"#,
    r#"123;d4h^1;p 4/m m m;-p 4 2"#,
    r#"124;d4h^2;p 4/m c c;-p 4 2c"#,
    r#"125:1;d4h^3;p 4/n b m:1;p 4 2 -1ab"#,
    r#"125:2;d4h^3;p 4/n b m:2;-p 4a 2b"#,
    r#"126:1;d4h^4;p 4/n n c:1;p 4 2 -1n"#,
    r#"126:2;d4h^4;p 4/n n c:2;-p 4a 2bc"#,
    r#"127;d4h^5;p 4/m b m;-p 4 2ab"#,
    r#"128;d4h^6;p 4/m n c;-p 4 2n"#,
    r#"129:1;d4h^7;p 4/n m m:1;p 4ab 2ab -1ab"#,
    r#"129:2;d4h^7;p 4/n m m:2;-p 4a 2a"#,
    r#"130:1;d4h^8;p 4/n c c:1;p 4ab 2n -1ab"#,
    r#"130:2;d4h^8;p 4/n c c:2;-p 4a 2ac"#,
    r#"131;d4h^9;p 42/m m c;-p 4c 2"#,
    r#"132;d4h^10;p 42/m c m;-p 4c 2c"#,
    r#"133:1;d4h^11;p 42/n b c:1;p 4n 2c -1n"#,
    r#"133:2;d4h^11;p 42/n b c:2;-p 4ac 2b"#,
    r#"134:1;d4h^12;p 42/n n m:1;p 4n 2 -1n"#,
    r#"134:2;d4h^12;p 42/n n m:2;-p 4ac 2bc"#,
    r#"135;d4h^13;p 42/m b c;-p 4c 2ab"#,
    r#"135*;d4h^13;p 42/m b c*;-p 42 2ab"#,
    r#"136;d4h^14;p 42/m n m;-p 4n 2n"#,
    r#"137:1;d4h^15;p 42/n m c:1;p 4n 2n -1n"#,
    r#"137:2;d4h^15;p 42/n m c:2;-p 4ac 2a"#,
    r#"138:1;d4h^16;p 42/n c m:1;p 4n 2ab -1n"#,
    r#"138:2;d4h^16;p 42/n c m:2;-p 4ac 2ac"#,
    r#"139;d4h^17;i 4/m m m;-i 4 2"#,
    r#"140;d4h^18;i 4/m c m;-i 4 2c"#,
    r#"141:1;d4h^19;i 41/a m d:1;i 4bw 2bw -1bw"#,
    r#"141:2;d4h^19;i 41/a m d:2;-i 4bd 2"#,
    r#"142:1;d4h^20;i 41/a c d:1;i 4bw 2aw -1bw"#,
    r#"142:2;d4h^20;i 41/a c d:2;-i 4bd 2c"#,
    r#"143;c3^1;p 3;p 3"#,
    r#"144;c3^2;p 31;p 31"#,
    r#"145;c3^3;p 32;p 32"#,
    r#"146:h;c3^4;r 3:h;r 3"#,
    r#"146:r;c3^4;r 3:r;p 3*"#,
    r#"147;c3i^1;p -3;-p 3"#,
    r#"148:h;c3i^2;r -3:h;-r 3"#,
    r#"148:r;c3i^2;r -3:r;-p 3*"#,
    r#"149;d3^1;p 3 1 2;p 3 2"#,
    r#"150;d3^2;p 3 2 1;p 3 2""#,
    r#"151;d3^3;p 31 1 2;p 31 2 (0 0 4)"#,
    r#"152;d3^4;p 31 2 1;p 31 2""#,
    r#"153;d3^5;p 32 1 2;p 32 2 (0 0 2)"#,
    // The operators generated for this setting may not agree with those listed by some
    // external structure files for quartz. Kept as is pending a definitive reference.
    r#"154;d3^6;p 32 2 1;p 32 2""#,
    r#"155:h;d3^7;r 3 2:h;r 3 2""#,
    r#"155:r;d3^7;r 3 2:r;p 3* 2"#,
    r#"156;c3v^1;p 3 m 1;p 3 -2""#,
    r#"157;c3v^2;p 3 1 m;p 3 -2"#,
    r#"158;c3v^3;p 3 c 1;p 3 -2"c"#,
    r#"159;c3v^4;p 3 1 c;p 3 -2c"#,
    r#"160:h;c3v^5;r 3 m:h;r 3 -2""#,
    r#"160:r;c3v^5;r 3 m:r;p 3* -2"#,
    r#"161:h;c3v^6;r 3 c:h;r 3 -2"c"#,
    r#"161:r;c3v^6;r 3 c:r;p 3* -2n"#,
    r#"162;d3d^1;p -3 1 m;-p 3 2"#,
    r#"163;d3d^2;p -3 1 c;-p 3 2c"#,
    r#"164;d3d^3;p -3 m 1;-p 3 2""#,
    r#"165;d3d^4;p -3 c 1;-p 3 2"c"#,
    r#"166:h;d3d^5;r -3 m:h;-r 3 2""#,
    r#"166:r;d3d^5;r -3 m:r;-p 3* 2"#,
    r#"167:h;d3d^6;r -3 c:h;-r 3 2"c"#,
    r#"167:r;d3d^6;r -3 c:r;-p 3* 2n"#,
    r#"168;c6^1;p 6;p 6"#,
    r#"169;c6^2;p 61;p 61"#,
    r#"170;c6^3;p 65;p 65"#,
    r#"171;c6^4;p 62;p 62"#,
    r#"172;c6^5;p 64;p 64"#,
    r#"173;c6^6;p 63;p 6c"#,
    r#"173*;c6^6;p 63*;p 63 "#,
    r#"174;c3h^1;p -6;p -6"#,
    r#"175;c6h^1;p 6/m;-p 6"#,
    r#"176;c6h^2;p 63/m;-p 6c"#,
    r#"176*;c6h^2;p 63/m*;-p 63"#,
    r#"177;d6^1;p 6 2 2;p 6 2"#,
    r#"178;d6^2;p 61 2 2;p 61 2 (0 0 5)"#,
    r#"179;d6^3;p 65 2 2;p 65 2 (0 0 1)"#,
    r#"180;d6^4;p 62 2 2;p 62 2 (0 0 4)"#,
    r#"181;d6^5;p 64 2 2;p 64 2 (0 0 2)"#,
    r#"182;d6^6;p 63 2 2;p 6c 2c"#,
    r#"182*;d6^6;p 63 2 2*;p 63 2c"#,
    r#"183;c6v^1;p 6 m m;p 6 -2"#,
    r#"184;c6v^2;p 6 c c;p 6 -2c"#,
    r#"185;c6v^3;p 63 c m;p 6c -2"#,
    r#"185*;c6v^3;p 63 c m*;p 63 -2"#,
    r#"186;c6v^4;p 63 m c;p 6c -2c"#,
    r#"186*;c6v^4;p 63 m c*;p 63 -2c"#,
    r#"187;d3h^1;p -6 m 2;p -6 2"#,
    r#"188;d3h^2;p -6 c 2;p -6c 2"#,
    r#"189;d3h^3;p -6 2 m;p -6 -2"#,
    r#"190;d3h^4;p -6 2 c;p -6c -2c"#,
    r#"191;d6h^1;p 6/m m m;-p 6 2"#,
    r#"192;d6h^2;p 6/m c c;-p 6 2c"#,
    r#"193;d6h^3;p 63/m c m;-p 6c 2"#,
    r#"193*;d6h^3;p 63/m c m*;-p 63 2"#,
    r#"194;d6h^4;p 63/m m c;-p 6c 2c"#,
    r#"194*;d6h^4;p 63/m m c*;-p 63 2c"#,
    r#"195;t^1;p 2 3;p 2 2 3"#,
    r#"196;t^2;f 2 3;f 2 2 3"#,
    r#"197;t^3;i 2 3;i 2 2 3"#,
    r#"198;t^4;p 21 3;p 2ac 2ab 3"#,
    r#"199;t^5;i 21 3;i 2b 2c 3"#,
    r#"200;th^1;p m -3;-p 2 2 3"#,
    r#"201:1;th^2;p n -3:1;p 2 2 3 -1n"#,
    r#"201:2;th^2;p n -3:2;-p 2ab 2bc 3"#,
    r#"202;th^3;f m -3;-f 2 2 3"#,
    r#"203:1;th^4;f d -3:1;f 2 2 3 -1d"#,
    r#"203:2;th^4;f d -3:2;-f 2uv 2vw 3"#,
    r#"204;th^5;i m -3;-i 2 2 3"#,
    r#"205;th^6;p a -3;-p 2ac 2ab 3"#,
    r#"206;th^7;i a -3;-i 2b 2c 3"#,
    r#"207;o^1;p 4 3 2;p 4 2 3"#,
    r#"208;o^2;p 42 3 2;p 4n 2 3"#,
    r#"209;o^3;f 4 3 2;f 4 2 3"#,
    r#"210;o^4;f 41 3 2;f 4d 2 3"#,
    r#"211;o^5;i 4 3 2;i 4 2 3"#,
    r#"212;o^6;p 43 3 2;p 4acd 2ab 3"#,
    r#"213;o^7;p 41 3 2;p 4bd 2ab 3"#,
    r#"214;o^8;i 41 3 2;i 4bd 2c 3"#,
    r#"215;td^1;p -4 3 m;p -4 2 3"#,
    r#"216;td^2;f -4 3 m;f -4 2 3"#,
    r#"217;td^3;i -4 3 m;i -4 2 3"#,
    r#"218;td^4;p -4 3 n;p -4n 2 3"#,
    r#"219;td^5;f -4 3 c;f -4a 2 3"#,
    r#"220;td^6;i -4 3 d;i -4bd 2c 3"#,
    r#"221;oh^1;p m -3 m;-p 4 2 3"#,
    r#"222:1;oh^2;p n -3 n:1;p 4 2 3 -1n"#,
    r#"222:2;oh^2;p n -3 n:2;-p 4a 2bc 3"#,
    r#"223;oh^3;p m -3 n;-p 4n 2 3"#,
    r#"224:1;oh^4;p n -3 m:1;p 4n 2 3 -1n"#,
    r#"224:2;oh^4;p n -3 m:2;-p 4bc 2bc 3"#,
    r#"225;oh^5;f m -3 m;-f 4 2 3"#,
    r#"226;oh^6;f m -3 c;-f 4a 2 3"#,
    r#"227:1;oh^7;f d -3 m:1;f 4d 2 3 -1d"#,
    r#"227:2;oh^7;f d -3 m:2;-f 4vw 2vw 3"#,
    r#"228:1;oh^8;f d -3 c:1;f 4d 2 3 -1ad"#,
    r#"228:2;oh^8;f d -3 c:2;-f 4ud 2vw 3"#,
    r#"229;oh^9;i m -3 m;-i 4 2 3"#,
    r#"230;oh^10;i a -3 d;-i 4bd 2c 3"#,
];
